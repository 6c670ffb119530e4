//! Walls domain: collision obstacles synthesized from authored wall lines.

mod events;
mod field;
mod systems;

#[cfg(test)]
mod tests;

pub use events::BuildWallField;
pub use field::{Obstacle, WallFieldBuilder};
pub use systems::WallObstacle;

use bevy::prelude::*;

use crate::walls::systems::{rebuild_wall_field, setup_wall_builder};

pub struct WallsPlugin;

impl Plugin for WallsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WallFieldBuilder>()
            .add_message::<BuildWallField>()
            .add_systems(Startup, setup_wall_builder)
            .add_systems(PostUpdate, rebuild_wall_field);
    }
}
