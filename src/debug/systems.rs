//! Debug domain: overlay toggles and drawing.

use bevy::prelude::*;

use crate::core::{Location, scene_to_world, world_to_scene};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{JumpController, MotionState, MovementInput, Player};
use crate::rooms::{ActiveRoom, Region};
use crate::walls::WallObstacle;

/// F3 toggles the gizmos, F4 the info overlay
pub(crate) fn toggle_debug_overlays(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("[DEBUG] Gizmos {}", on_off(debug_state.show_gizmos));
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", on_off(debug_state.show_info));
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

pub(crate) fn draw_debug_gizmos(
    mut gizmos: Gizmos,
    active: Option<Res<ActiveRoom>>,
    obstacles: Query<(&Transform, &WallObstacle)>,
    players: Query<&Transform, With<Player>>,
) {
    let wall_color = Color::srgb(0.9, 0.3, 0.3);
    for (transform, obstacle) in &obstacles {
        gizmos.rect_2d(
            transform.translation.truncate(),
            Vec2::splat(obstacle.size),
            wall_color,
        );
    }

    let Some(active) = active else {
        return;
    };

    gizmos.rect_2d(
        scene_to_world(active.size * 0.5),
        active.size,
        Color::srgb(0.3, 0.3, 0.9),
    );

    let region_color = if active.prompt_visible {
        Color::srgb(0.3, 0.9, 0.4)
    } else {
        Color::srgb(0.9, 0.9, 0.3)
    };
    match active.region {
        Region::NearDoor {
            center_x,
            margin_x,
            threshold_y,
        } => {
            let top_left = Vec2::new(center_x - margin_x, threshold_y);
            let size = Vec2::new(margin_x * 2.0, active.size.y - threshold_y);
            gizmos.rect_2d(scene_to_world(top_left + size * 0.5), size, region_color);
        }
        Region::NearCenter { center, margin } => {
            gizmos.rect_2d(scene_to_world(center), Vec2::splat(margin * 2.0), region_color);
        }
    }

    for transform in &players {
        gizmos.cross_2d(transform.translation.truncate(), 8.0, region_color);
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    location: Res<State<Location>>,
    input: Res<MovementInput>,
    player_query: Query<(&Transform, &MotionState, &JumpController), With<Player>>,
    obstacles: Query<(), With<WallObstacle>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, motion, jump)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = world_to_scene(transform.translation.truncate());
        **text = format!(
            "Room: {:?}\nPos: ({:.0}, {:.0})\nIntent: ({}, {})\nFacing: {:?}\nWiggle: {:.1}\nJump: {:?}\nObstacles: {}",
            location.get(),
            pos.x,
            pos.y,
            input.intent.dx,
            input.intent.dy,
            motion.facing,
            motion.wiggle_angle(),
            jump.phase(),
            obstacles.iter().count()
        );
    }
}
