//! Movement domain: intent, walking, wiggle and jump for the player.

mod bootstrap;
mod components;
mod intent;
mod jump;
mod motion;
mod resources;
mod systems;


pub use bootstrap::{PlayerSprites, spawn_player};
pub use components::{Avatar, Facing, GameLayer, Player};
pub use intent::{DirectionalState, InputIntent, resolve_intent};
pub use jump::{JumpController, JumpPhase, JumpTransition};
pub use motion::{MotionController, MotionState, MotionStep, WiggleEdge, WiggleTuning};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::Location;
use crate::movement::bootstrap::{load_player_sprites, setup_movement_tuning};
use crate::movement::systems::{animate_avatar, apply_jump, apply_motion, read_input};

/// Per-frame input, motion and jump updates, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSystems;

fn in_room(location: Res<State<Location>>) -> bool {
    location.get().is_room()
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (setup_movement_tuning, load_player_sprites))
            .add_systems(
                Update,
                (read_input, apply_motion, apply_jump, animate_avatar)
                    .chain()
                    .in_set(MovementSystems)
                    .run_if(in_room),
            );
    }
}
