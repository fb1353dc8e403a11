use smallvec::SmallVec;

use crate::domain::audio::{Panning, SoundCue};
use crate::state::player::{Position, Team};
use crate::state::resources::{CollisionBox, ModelKind};

/// Type alias for small collections that avoid allocations
pub type SmallSlotVec = SmallVec<[usize; 8]>;
pub type SmallEventVec = SmallVec<[SyncEvent; 16]>;
pub type WorldEventVec = SmallVec<[WorldEvent; 16]>;

/// Sync event for delta-based state updates
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    HealthChanged { slot: usize, health: i32 },
    DeathChanged { slot: usize, is_dead: bool },
    MoneyChanged { slot: usize, money: u32 },
    TeamChanged { slot: usize, team: Team },
    ArmorChanged { slot: usize, armor: u32, has_headset: bool },
    BombChanged { slot: usize, has_bomb: bool },
    StatsChanged { slot: usize, kills: u32, deaths: u32 },
    /// Slot was freed since the last sync
    PlayerRemoved { slot: usize },
}

/// Side effect the world asks the render/audio/physics engine to perform
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    ModelCreated { model: u32, kind: ModelKind },
    ModelDeleted { model: u32 },
    PhysicsCreated { physics: u32, model: u32 },
    PhysicsDeleted { physics: u32 },
    ModelMoved { model: u32, position: Position },
    ModelSkin { model: u32, team: Team },
    Sound { cue: SoundCue, spatial: Option<Panning> },
    AimDisabled,
    CrosshairVisible(bool),
    ShopRefresh,
    ShopZoneMoved(CollisionBox),
    CameraTarget { slot: usize },
}
