pub mod audio;
pub mod bomb;
pub mod economy;
pub mod registry;
pub mod round;
pub mod spawn;
pub mod timers;
pub mod vitals;
