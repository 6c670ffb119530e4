//! Movement domain: player sprite assets and spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::{GameConfig, scene_to_world};
use crate::movement::{Avatar, Facing, GameLayer, MotionState, MovementTuning, Player};

const PLAYER_SHEET: &str = "sprites/jack.png";
const FRAME_SIZE: u32 = 64;
const FRAME_COUNT: u32 = 4;

/// Handles for the player sprite sheet.
#[derive(Resource, Debug, Clone)]
pub struct PlayerSprites {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
}

pub(crate) fn setup_movement_tuning(mut commands: Commands, config: Res<GameConfig>) {
    match MovementTuning::from_config(&config) {
        Ok(tuning) => {
            info!(
                "Movement tuning: speed={}, jump_height={}, body_radius={}",
                tuning.motion.speed(),
                config.jump_height,
                tuning.body_radius
            );
            commands.insert_resource(tuning);
        }
        Err(e) => error!("Rejected movement config, keeping defaults: {}", e),
    }
}

pub(crate) fn load_player_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let layout =
        TextureAtlasLayout::from_grid(UVec2::splat(FRAME_SIZE), FRAME_COUNT, 1, None, None);
    commands.insert_resource(PlayerSprites {
        image: asset_server.load(PLAYER_SHEET),
        layout: layouts.add(layout),
    });
}

/// Spawn the player body at `scene_position` with its avatar child.
pub fn spawn_player(
    commands: &mut Commands,
    sprites: &PlayerSprites,
    tuning: &MovementTuning,
    scene_position: Vec2,
) -> Entity {
    commands
        .spawn((
            // Identity & Movement
            (Player, MotionState::default(), tuning.jump.clone()),
            Transform::from_translation(scene_to_world(scene_position).extend(10.0)),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::circle(tuning.body_radius),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Wall]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                Avatar,
                Sprite::from_atlas_image(
                    sprites.image.clone(),
                    TextureAtlas {
                        layout: sprites.layout.clone(),
                        index: Facing::default().frame_index(),
                    },
                ),
                Transform::from_scale(Vec3::splat(tuning.sprite_scale)),
            ));
        })
        .id()
}
