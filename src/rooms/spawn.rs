//! Rooms domain: room spawning helpers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::{GameConfig, Location, room_center_world, scene_to_world};
use crate::movement::{GameLayer, MovementTuning, PlayerSprites, spawn_player};
use crate::rooms::components::{
    ActionPrompt, PromptButton, RoomBackground, RoomBounds, RoomScoped,
};
use crate::rooms::data::RoomData;
use crate::rooms::events::RoomEnteredEvent;
use crate::rooms::flow::{ActiveRoom, SpawnHandover, TransitionCooldown, bounds_rects};
use crate::rooms::registry::RoomRegistry;
use crate::walls::BuildWallField;

const BOUNDS_THICKNESS: f32 = 32.0;

pub(crate) fn spawn_current_room(
    mut commands: Commands,
    location: Res<State<Location>>,
    registry: Res<RoomRegistry>,
    config: Res<GameConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    asset_server: Res<AssetServer>,
    sprites: Option<Res<PlayerSprites>>,
    tuning: Res<MovementTuning>,
    mut handover: ResMut<SpawnHandover>,
    mut cooldown: ResMut<TransitionCooldown>,
    mut wall_requests: MessageWriter<BuildWallField>,
    mut entered: MessageWriter<RoomEnteredEvent>,
) {
    let location = *location.get();
    let Some(room) = registry.get(location) else {
        error!("No room registered for {:?}", location);
        return;
    };

    let display_size = windows
        .single()
        .map(|window| window.size())
        .unwrap_or_else(|_| config.display_size());
    let size = room.size(display_size);

    info!(
        "Entering {} ({}x{}, walls '{}')",
        room.name, size.x, size.y, room.walls
    );

    commands.spawn((
        RoomScoped,
        RoomBackground,
        Sprite {
            image: asset_server.load(room.background.clone()),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(room_center_world(size).extend(-10.0)),
    ));

    spawn_room_bounds(&mut commands, size);

    let spawn_at = handover.take_or(room.default_spawn);
    match sprites {
        Some(sprites) => {
            let player = spawn_player(&mut commands, &sprites, &tuning, spawn_at);
            commands.entity(player).insert(Name::new("Player"));
            debug!("Spawned player at {:?}", spawn_at);
        }
        None => error!("Player sprites not loaded, {} has no player", room.name),
    }

    spawn_action_prompt(&mut commands, room);

    wall_requests.write(BuildWallField {
        spec_key: Some(room.walls.clone()),
        display_size: size,
    });

    commands.insert_resource(ActiveRoom {
        location,
        size,
        region: room.prompt.region.resolve(size),
        prompt_visible: false,
    });
    cooldown.reset();
    entered.write(RoomEnteredEvent { location });
}

/// Enclose the room in four static colliders just outside its edges.
pub(crate) fn spawn_room_bounds(commands: &mut Commands, size: Vec2) {
    let layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    for (center, extent) in bounds_rects(size, BOUNDS_THICKNESS) {
        commands.spawn((
            RoomScoped,
            RoomBounds,
            Transform::from_translation(scene_to_world(center).extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(extent.x, extent.y),
            layers,
        ));
    }
}

fn spawn_action_prompt(commands: &mut Commands, room: &RoomData) {
    commands
        .spawn((
            RoomScoped,
            ActionPrompt,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(40.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    PromptButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.9)),
                    BorderColor::all(Color::srgb(0.3, 0.6, 0.4)),
                ))
                .with_child((
                    Text::new(room.prompt.label.clone()),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.3, 0.9, 0.4)),
                ));
        });
}
