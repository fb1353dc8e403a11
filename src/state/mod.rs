pub mod commands;
pub mod player;
pub mod resources;
pub mod world;
