//! Per-player state for a round-based team shooter: roster slots, health and
//! death transitions, money, round resets, bomb carrier selection and spawns.
//!
//! Everything operates on an explicit [`World`]; engine side effects come out as
//! [`WorldEvent`]s for an [`Engine`] to consume.

pub mod domain;
pub mod error;
pub mod state;
pub mod tick;
pub mod utils;

pub use error::RosterError;
pub use state::commands::WorldCommand;
pub use state::player::{Player, Position, Team};
pub use state::world::{Menu, RoundState, World};
pub use tick::engine::{Engine, LogEngine};
pub use utils::buffers::{SyncEvent, WorldEvent};
pub use utils::config::Config;
