//! Walls domain: spawning obstacle colliders for the current room.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::WallLibrary;
use crate::core::{GameConfig, scene_to_world};
use crate::movement::GameLayer;
use crate::walls::events::BuildWallField;
use crate::walls::field::WallFieldBuilder;

/// Marker for one spawned wall obstacle.
#[derive(Component, Debug)]
pub struct WallObstacle {
    pub size: f32,
}

pub(crate) fn setup_wall_builder(mut commands: Commands, config: Res<GameConfig>) {
    match WallFieldBuilder::new(config.wall_segment_size) {
        Ok(builder) => commands.insert_resource(builder),
        Err(e) => error!("Rejected wall segment size, keeping default: {}", e),
    }
}

/// Replace the current obstacle field with a freshly built one.
///
/// Only the latest request of a frame is honoured; a rebuild always starts
/// from scratch.
pub(crate) fn rebuild_wall_field(
    mut commands: Commands,
    mut requests: MessageReader<BuildWallField>,
    library: Res<WallLibrary>,
    builder: Res<WallFieldBuilder>,
    existing: Query<Entity, With<WallObstacle>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let spec = request.spec_key.as_deref().and_then(|key| library.get(key));
    if spec.is_none() {
        warn!(
            "No wall data for {:?}, room will have no walls",
            request.spec_key
        );
    }

    let obstacles = builder.build(spec, request.display_size);
    let layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for obstacle in &obstacles {
        commands.spawn((
            WallObstacle {
                size: obstacle.size,
            },
            Transform::from_translation(scene_to_world(obstacle.center()).extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(obstacle.size, obstacle.size),
            layers,
        ));
    }

    info!(
        "Built wall field {:?} at {}x{}: {} obstacles",
        request.spec_key,
        request.display_size.x,
        request.display_size.y,
        obstacles.len()
    );
}
