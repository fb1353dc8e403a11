use crate::state::player::Position;
use crate::utils::buffers::{WorldEvent, WorldEventVec};

/// Engine model owned by exactly one slot. Not `Clone`: releasing consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct ModelHandle(u32);

/// Engine physics body owned by exactly one slot
#[derive(Debug, PartialEq, Eq)]
pub struct PhysicsHandle(u32);

impl ModelHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl PhysicsHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    LocalBody,
    RemoteBody,
    Shadow,
}

/// Axis-aligned trigger volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub center: Position,
    pub size: Position,
}

/// Everything a player slot holds in the engine
#[derive(Debug)]
pub struct PlayerResources {
    pub model: ModelHandle,
    pub physics: Option<PhysicsHandle>,
}

impl PlayerResources {
    /// Release physics then model
    pub fn release(self, events: &mut WorldEventVec) {
        if let Some(physics) = self.physics {
            events.push(WorldEvent::PhysicsDeleted { physics: physics.id() });
        }
        release_model(self.model, events);
    }
}

pub fn release_model(model: ModelHandle, events: &mut WorldEventVec) {
    events.push(WorldEvent::ModelDeleted { model: model.id() });
}

/// Hands out engine handle ids, announcing each creation as an event
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u32,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&mut self, kind: ModelKind, events: &mut WorldEventVec) -> ModelHandle {
        let handle = ModelHandle(self.bump());
        events.push(WorldEvent::ModelCreated {
            model: handle.id(),
            kind,
        });
        handle
    }

    pub fn physics(&mut self, model: &ModelHandle, events: &mut WorldEventVec) -> PhysicsHandle {
        let handle = PhysicsHandle(self.bump());
        events.push(WorldEvent::PhysicsCreated {
            physics: handle.id(),
            model: model.id(),
        });
        handle
    }

    fn bump(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}
