//! Rooms domain: room flow systems and transition logic.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::core::{Location, room_center_world, scene_to_world, world_to_scene};
use crate::movement::{JumpController, Player};
use crate::rooms::components::{
    ActionPrompt, PromptButton, RoomBackground, RoomBounds, RoomScoped,
};
use crate::rooms::events::{RoomEnteredEvent, RoomExitRequested};
use crate::rooms::flow::{ActiveRoom, SpawnHandover, TransitionCooldown, clamp_camera};
use crate::rooms::registry::RoomRegistry;
use crate::rooms::spawn::spawn_room_bounds;
use crate::walls::{BuildWallField, WallObstacle};

const WINDOW_TITLE: &str = "roomwalk";

pub(crate) fn tick_transition_cooldown(mut cooldown: ResMut<TransitionCooldown>, time: Res<Time>) {
    cooldown.tick(time.delta());
}

/// Tear down everything the room spawned, including the player and any
/// jump it was in the middle of.
pub(crate) fn cleanup_room(
    mut commands: Commands,
    scoped: Query<Entity, Or<(With<RoomScoped>, With<WallObstacle>)>>,
    mut players: Query<(Entity, &mut JumpController), With<Player>>,
) {
    for (entity, mut jump) in &mut players {
        if let Some(origin) = jump.cancel() {
            debug!("Discarded in-flight jump from offset {}", origin);
        }
        commands.entity(entity).despawn();
    }

    let mut count = 0;
    for entity in &scoped {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Despawned {} room entities", count);
    commands.remove_resource::<ActiveRoom>();
}

/// Show the action prompt while the player stands inside the room's region.
pub(crate) fn update_prompt_visibility(
    mut active: ResMut<ActiveRoom>,
    player: Query<&Transform, With<Player>>,
    mut prompt: Query<&mut Visibility, With<ActionPrompt>>,
) {
    let inside = player
        .single()
        .map(|transform| {
            let scene = world_to_scene(transform.translation.truncate());
            active.region.contains(scene)
        })
        .unwrap_or(false);

    if inside != active.prompt_visible {
        debug!("Action prompt {}", if inside { "shown" } else { "hidden" });
        active.prompt_visible = inside;
    }

    for mut visibility in &mut prompt {
        *visibility = if inside {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Activate the prompt with E, Enter, or a click/tap on it.
pub(crate) fn activate_prompt(
    keyboard: Res<ButtonInput<KeyCode>>,
    active: Res<ActiveRoom>,
    cooldown: Res<TransitionCooldown>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<PromptButton>)>,
    mut requests: MessageWriter<RoomExitRequested>,
) {
    if !active.prompt_visible || !cooldown.can_transition() {
        return;
    }

    let key_pressed = keyboard.any_just_pressed([KeyCode::KeyE, KeyCode::Enter]);
    let clicked = buttons
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);

    if key_pressed || clicked {
        info!("Action prompt activated in {:?}", active.location);
        requests.write(RoomExitRequested {
            from: active.location,
        });
    }
}

pub(crate) fn process_room_transitions(
    mut requests: MessageReader<RoomExitRequested>,
    registry: Res<RoomRegistry>,
    mut handover: ResMut<SpawnHandover>,
    mut cooldown: ResMut<TransitionCooldown>,
    mut next_location: ResMut<NextState<Location>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    let Some(room) = registry.get(request.from) else {
        warn!("Exit requested from unknown room {:?}", request.from);
        return;
    };

    info!(
        "Leaving {} for {:?} (handover {:?})",
        room.name, room.prompt.target, room.prompt.handover
    );
    handover.position = room.prompt.handover;
    cooldown.reset();
    next_location.set(room.prompt.target);
}

/// Display-sized rooms follow the window: resize the background, move the
/// bounds and rebuild the walls from scratch.
pub(crate) fn resize_display_room(
    mut commands: Commands,
    mut resized: MessageReader<WindowResized>,
    registry: Res<RoomRegistry>,
    mut active: ResMut<ActiveRoom>,
    mut backgrounds: Query<(&mut Sprite, &mut Transform), With<RoomBackground>>,
    bounds: Query<Entity, With<RoomBounds>>,
    mut wall_requests: MessageWriter<BuildWallField>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    let Some(room) = registry.get(active.location) else {
        return;
    };
    if !room.follows_display() {
        return;
    }

    let size = Vec2::new(event.width, event.height);
    if size == active.size || size.min_element() <= 0.0 {
        return;
    }

    active.size = size;
    active.region = room.prompt.region.resolve(size);

    for (mut sprite, mut transform) in &mut backgrounds {
        sprite.custom_size = Some(size);
        transform.translation = room_center_world(size).extend(transform.translation.z);
    }

    for entity in &bounds {
        commands.entity(entity).despawn();
    }
    spawn_room_bounds(&mut commands, size);

    wall_requests.write(BuildWallField {
        spec_key: Some(room.walls.clone()),
        display_size: size,
    });
    info!("Resized {} to {}x{}", room.name, size.x, size.y);
}

/// Keep the camera on the player without showing anything past the room edges.
pub(crate) fn follow_camera(
    active: Res<ActiveRoom>,
    windows: Query<&Window, With<PrimaryWindow>>,
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };

    let target = player
        .single()
        .map(|transform| world_to_scene(transform.translation.truncate()))
        .unwrap_or(active.size * 0.5);

    let center = clamp_camera(target, window.size(), active.size);
    camera_transform.translation = scene_to_world(center).extend(camera_transform.translation.z);
}

pub(crate) fn update_window_title(
    mut entered: MessageReader<RoomEnteredEvent>,
    registry: Res<RoomRegistry>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(event) = entered.read().last() else {
        return;
    };
    let Some(room) = registry.get(event.location) else {
        return;
    };
    for mut window in &mut windows {
        window.title = format!("{} - {}", WINDOW_TITLE, room.name);
    }
}
