//! Controls domain: where the virtual buttons sit on screen.

use bevy::prelude::*;

use crate::controls::touch::VirtualButton;

pub const BUTTON_SIZE: f32 = 60.0;
const DPAD_OFFSET: f32 = 60.0;
const DPAD_X: f32 = 100.0;
const DPAD_FROM_BOTTOM: f32 = 100.0;
const JUMP_FROM_RIGHT: f32 = 80.0;

/// Centre of `button` in window coordinates (origin top-left, `y` down).
pub fn button_center(button: VirtualButton, window_size: Vec2) -> Vec2 {
    let dpad = Vec2::new(DPAD_X, window_size.y - DPAD_FROM_BOTTOM);
    match button {
        VirtualButton::Up => dpad - Vec2::new(0.0, DPAD_OFFSET),
        VirtualButton::Down => dpad + Vec2::new(0.0, DPAD_OFFSET),
        VirtualButton::Left => dpad - Vec2::new(DPAD_OFFSET, 0.0),
        VirtualButton::Right => dpad + Vec2::new(DPAD_OFFSET, 0.0),
        VirtualButton::Jump => Vec2::new(
            window_size.x - JUMP_FROM_RIGHT,
            window_size.y - DPAD_FROM_BOTTOM,
        ),
    }
}

pub fn button_rect(button: VirtualButton, window_size: Vec2) -> Rect {
    Rect::from_center_size(button_center(button, window_size), Vec2::splat(BUTTON_SIZE))
}

/// The button under `position`, if any.
pub fn hit_test(position: Vec2, window_size: Vec2) -> Option<VirtualButton> {
    VirtualButton::ALL
        .into_iter()
        .find(|&b| button_rect(b, window_size).contains(position))
}
