pub mod delta_sync;
pub mod engine;
pub mod world_tick;
