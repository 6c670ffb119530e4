//! Core domain: configuration, room states and coordinate helpers.

mod resources;
mod space;
mod state;
mod systems;


pub use resources::{ConfigError, ConfigOrigin, GameConfig, TouchMode, require_positive};
pub use space::{room_center_world, scene_to_world, world_to_scene};
pub use state::Location;

use bevy::prelude::*;

use crate::core::systems::{finish_loading, log_config_origin, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Location>()
            .init_resource::<GameConfig>()
            .add_systems(Startup, (log_config_origin, setup_camera, finish_loading));
    }
}
