//! Controls domain: on-screen virtual buttons for touch devices.

mod layout;
mod systems;
mod touch;

#[cfg(test)]
mod tests;

pub use layout::{button_center, hit_test};
pub use touch::{ButtonOwnership, TouchControls, VirtualButton};

use bevy::prelude::*;

use crate::controls::systems::{
    read_touches, setup_touch_mode, spawn_touch_buttons, update_touch_buttons,
};
use crate::movement::MovementSystems;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchControls>()
            .add_systems(Startup, setup_touch_mode)
            .add_systems(Update, read_touches.before(MovementSystems))
            .add_systems(
                Update,
                (spawn_touch_buttons, update_touch_buttons)
                    .chain()
                    .after(MovementSystems),
            );
    }
}
