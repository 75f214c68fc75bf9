use bitflags::bitflags;
use glam::vec2;
use minifb::Key;

use crate::world::CameraState;

/// World units panned per frame while a pan key is held.
pub const PAN_STEP: f32 = 5.0;
/// Radians turned per frame while a turn key is held.
pub const TURN_STEP: f32 = 0.05;

bitflags! {
    /// Camera controls held during one frame.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InputFlags: u8 {
        const PAN_LEFT   = 0x01; // ←  x −
        const PAN_RIGHT  = 0x02; // →  x +
        const PAN_UP     = 0x04; // ↑  y −
        const PAN_DOWN   = 0x08; // ↓  y +
        const TURN_LEFT  = 0x10; // Z
        const TURN_RIGHT = 0x20; // X
    }
}

const KEY_MAP: [(Key, InputFlags); 6] = [
    (Key::Left, InputFlags::PAN_LEFT),
    (Key::Right, InputFlags::PAN_RIGHT),
    (Key::Up, InputFlags::PAN_UP),
    (Key::Down, InputFlags::PAN_DOWN),
    (Key::Z, InputFlags::TURN_LEFT),
    (Key::X, InputFlags::TURN_RIGHT),
];

impl InputFlags {
    /// Collect the flags whose key `is_down` reports as held.
    pub fn from_keys<F>(mut is_down: F) -> Self
    where
        F: FnMut(Key) -> bool,
    {
        KEY_MAP
            .iter()
            .filter(|(key, _)| is_down(*key))
            .fold(InputFlags::empty(), |acc, (_, flag)| acc | *flag)
    }
}

/// Apply one frame of input to the camera. Opposite keys cancel out.
pub fn apply_input(camera: &mut CameraState, input: InputFlags) {
    let axis = |neg: InputFlags, pos: InputFlags| -> f32 {
        input.contains(pos) as i32 as f32 - input.contains(neg) as i32 as f32
    };

    let dx = axis(InputFlags::PAN_LEFT, InputFlags::PAN_RIGHT);
    let dy = axis(InputFlags::PAN_UP, InputFlags::PAN_DOWN);
    if dx != 0.0 || dy != 0.0 {
        camera.pan(vec2(dx, dy) * PAN_STEP);
    }

    let turn = axis(InputFlags::TURN_RIGHT, InputFlags::TURN_LEFT);
    if turn != 0.0 {
        camera.turn(turn * TURN_STEP);
    }
}
