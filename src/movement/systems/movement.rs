//! Movement domain: per-frame velocity, jump and avatar presentation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controls::TouchControls;
use crate::core::scene_to_world;
use crate::movement::{
    Avatar, JumpController, JumpTransition, MotionState, MovementInput, MovementTuning, Player,
    WiggleEdge,
};

pub(crate) fn apply_motion(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    for (entity, mut state, mut velocity) in &mut query {
        let step = tuning.motion.drive(&mut state, input.intent);
        velocity.0 = scene_to_world(step.velocity);

        match step.wiggle {
            Some(WiggleEdge::Started) => debug!("{:?} started walking", entity),
            Some(WiggleEdge::Stopped) => debug!("{:?} stopped walking", entity),
            None => {}
        }
    }
}

/// Tick jumps and start a new one on request. The jump offset lives on the
/// avatar child so the physics body never leaves the floor.
pub(crate) fn apply_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut touch: Option<ResMut<TouchControls>>,
    mut players: Query<&mut JumpController, With<Player>>,
    mut avatars: Query<(&ChildOf, &mut Transform), With<Avatar>>,
) {
    let dt = time.delta_secs();

    for (child_of, mut transform) in &mut avatars {
        let Ok(mut jump) = players.get_mut(child_of.parent()) else {
            continue;
        };

        if let Some(JumpTransition::Landed { origin }) = jump.tick(dt) {
            transform.translation.y = scene_to_world(Vec2::new(0.0, origin)).y;
            debug!("Jump landed at offset {}", origin);
        }

        let origin = -transform.translation.y;
        if start_jump(&mut jump, origin, &input, touch.as_deref_mut()) {
            debug!("Jump started from offset {}", origin);
        }

        if let Some(offset) = jump.offset() {
            transform.translation.y = scene_to_world(Vec2::new(0.0, offset)).y;
        }
    }
}

/// Start a jump if one was requested and the controller is idle. The touch
/// latch is cleared only when the jump really starts, so a press held through
/// a running jump fires on landing.
pub(crate) fn start_jump(
    jump: &mut JumpController,
    origin: f32,
    input: &MovementInput,
    touch: Option<&mut TouchControls>,
) -> bool {
    if !input.jump_requested || !jump.trigger(origin) {
        return false;
    }
    if input.touch_jump {
        if let Some(controls) = touch {
            controls.clear_jump();
        }
    }
    true
}

/// Advance the wiggle and pick the sprite frame for the current facing.
pub(crate) fn animate_avatar(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut players: Query<&mut MotionState, With<Player>>,
    mut avatars: Query<(&ChildOf, &mut Transform, &mut Sprite), With<Avatar>>,
) {
    let dt = time.delta_secs();

    for (child_of, mut transform, mut sprite) in &mut avatars {
        let Ok(mut state) = players.get_mut(child_of.parent()) else {
            continue;
        };

        let angle = tuning.motion.advance_wiggle(&mut state, dt);
        // Positive angles tilt clockwise on screen
        transform.rotation = Quat::from_rotation_z(-angle.to_radians());

        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = state.facing.frame_index();
        }
    }
}
