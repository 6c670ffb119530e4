//! Rooms domain: room flow plugin wiring and public exports.

mod components;
mod data;
mod events;
mod flow;
mod region;
mod registry;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use data::RoomSizing;
pub use flow::{ActiveRoom, SpawnHandover, TransitionCooldown, bounds_rects, clamp_camera};
pub use region::{Region, RegionSpec};
pub use registry::{GARDEN_SIZE, RoomRegistry};

use bevy::prelude::*;

use crate::core::Location;
use crate::movement::MovementSystems;
use crate::rooms::events::{RoomEnteredEvent, RoomExitRequested};
use crate::rooms::spawn::spawn_current_room;
use crate::rooms::systems::{
    activate_prompt, cleanup_room, follow_camera, process_room_transitions, resize_display_room,
    tick_transition_cooldown, update_prompt_visibility, update_window_title,
};

const ROOMS: [Location; 2] = [Location::Bedroom, Location::Garden];

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomRegistry>()
            .init_resource::<SpawnHandover>()
            .init_resource::<TransitionCooldown>()
            .add_message::<RoomEnteredEvent>()
            .add_message::<RoomExitRequested>();

        for location in ROOMS {
            app.add_systems(OnEnter(location), spawn_current_room)
                .add_systems(OnExit(location), cleanup_room);
        }

        app.add_systems(Update, (tick_transition_cooldown, update_window_title))
            .add_systems(
                Update,
                (
                    update_prompt_visibility,
                    activate_prompt,
                    process_room_transitions,
                    resize_display_room,
                    follow_camera,
                )
                    .chain()
                    .after(MovementSystems)
                    .run_if(resource_exists::<ActiveRoom>),
            );
    }
}
