use thiserror::Error;

use crate::state::player::Team;

/// Why a roster operation was refused. The world is left untouched in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("no free player slot")]
    SlotFull,
    #[error("local player slot is already taken")]
    LocalSlotTaken,
    #[error("player id {0} is already in use")]
    DuplicateId(u32),
    #[error("every bot name is taken")]
    NamePoolExhausted,
    #[error("no terrorist can carry the bomb")]
    NoEligibleTerrorist,
    #[error("{team:?} needs more spawn points than the {available} on this map")]
    SpawnPoolExhausted { team: Team, available: usize },
    #[error("slot {0} has no recorded spawn point")]
    NoSpawnRecorded(usize),
    #[error("slot {0} is free")]
    VacantSlot(usize),
    #[error("slot {0} does not exist")]
    InvalidSlot(usize),
}
