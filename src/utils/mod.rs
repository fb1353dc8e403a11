pub mod buffers;
pub mod config;
pub mod maps;
pub mod names;
pub mod partymodes;
pub mod weapondb;
