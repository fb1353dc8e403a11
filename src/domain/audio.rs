use crate::state::player::Position;

/// Full turn in map angle units
pub const ANGLE_UNITS_PER_TURN: f32 = 512.0;
/// Volume falloff per world unit for positional cues
pub const DEATH_CUE_FALLOFF: f32 = 0.10;

const MAX_VOLUME: f32 = 255.0;
const PAN_CENTER: f32 = 64.0;
const PAN_RANGE: f32 = 63.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Death,
}

/// Volume (0-255) and stereo pan (0 left, 64 centre, 127 right)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panning {
    pub volume: u8,
    pub pan: u8,
}

/// Panning of a sound at `source` heard by a listener at `listener` facing `listener_angle`.
/// Height is ignored.
pub fn panning(listener: Position, listener_angle: f32, source: Position, falloff: f32) -> Panning {
    let dx = source.x - listener.x;
    let dz = source.z - listener.z;
    let distance = (dx * dx + dz * dz).sqrt();

    let volume = (MAX_VOLUME / (1.0 + distance * falloff)).round().clamp(0.0, MAX_VOLUME) as u8;

    if distance < f32::EPSILON {
        return Panning {
            volume,
            pan: PAN_CENTER as u8,
        };
    }

    let facing = listener_angle / ANGLE_UNITS_PER_TURN * std::f32::consts::TAU;
    let relative = dx.atan2(dz) - facing;
    let pan = (PAN_CENTER + PAN_RANGE * relative.sin()).round().clamp(0.0, 127.0) as u8;

    Panning { volume, pan }
}
