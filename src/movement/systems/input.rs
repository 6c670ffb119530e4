//! Movement domain: input sampling for walking and jumping.

use bevy::prelude::*;

use crate::controls::TouchControls;
use crate::movement::{DirectionalState, MovementInput, resolve_intent};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    touch: Option<Res<TouchControls>>,
    mut input: ResMut<MovementInput>,
) {
    let keys = DirectionalState {
        up: keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW),
        down: keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD),
    };

    // The touch jump latch is only peeked here; it is cleared once a jump
    // actually starts
    let (touch_state, touch_jump) = match touch {
        Some(controls) if controls.is_active() => {
            (Some(controls.directions()), controls.jump_latched())
        }
        _ => (None, false),
    };

    input.intent = resolve_intent(keys, touch_state);
    input.jump_requested = keyboard.just_pressed(KeyCode::Space) || touch_jump;
    input.touch_jump = touch_jump;
}
