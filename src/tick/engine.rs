use std::collections::HashSet;

use crate::utils::buffers::WorldEvent;

/// Render/physics/audio backend fed with the side effects of each frame
pub trait Engine: Send {
    fn apply(&mut self, event: &WorldEvent);
}

/// Engine that only logs what it is asked to do and tracks live handles
#[derive(Debug, Default)]
pub struct LogEngine {
    live_models: HashSet<u32>,
    live_physics: HashSet<u32>,
    applied: usize,
}

impl LogEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_models(&self) -> usize {
        self.live_models.len()
    }

    pub fn live_physics(&self) -> usize {
        self.live_physics.len()
    }

    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl Engine for LogEngine {
    fn apply(&mut self, event: &WorldEvent) {
        self.applied += 1;
        match event {
            WorldEvent::ModelCreated { model, .. } => {
                self.live_models.insert(*model);
            }
            WorldEvent::ModelDeleted { model } => {
                if !self.live_models.remove(model) {
                    log::warn!("Deleting unknown model {}", model);
                }
            }
            WorldEvent::PhysicsCreated { physics, .. } => {
                self.live_physics.insert(*physics);
            }
            WorldEvent::PhysicsDeleted { physics } => {
                if !self.live_physics.remove(physics) {
                    log::warn!("Deleting unknown physics body {}", physics);
                }
            }
            WorldEvent::ModelMoved { model, .. } | WorldEvent::ModelSkin { model, .. } => {
                if !self.live_models.contains(model) {
                    log::warn!("Event for unknown model {}: {:?}", model, event);
                }
            }
            _ => {}
        }
        log::trace!("engine <- {:?}", event);
    }
}
