//! Rooms domain: room registry data and lookup helpers.

use bevy::prelude::*;

use crate::core::Location;
use crate::rooms::data::{RoomData, RoomPrompt, RoomSizing};
use crate::rooms::region::RegionSpec;

/// Native size of `garden.png`
pub const GARDEN_SIZE: UVec2 = UVec2::new(1600, 1200);

/// Available rooms, one per [`Location`] room state
#[derive(Resource, Debug)]
pub struct RoomRegistry {
    pub rooms: Vec<RoomData>,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self {
            rooms: vec![
                RoomData {
                    location: Location::Bedroom,
                    name: "My Room".to_string(),
                    background: "backgrounds/my_room.png".to_string(),
                    walls: "my_room".to_string(),
                    sizing: RoomSizing::Display,
                    default_spawn: Vec2::new(200.0, 450.0),
                    prompt: RoomPrompt {
                        label: "Leave Room?".to_string(),
                        region: RegionSpec::BottomDoor {
                            margin_x: 50.0,
                            band: 100.0,
                        },
                        target: Location::Garden,
                        handover: Some(Vec2::new(500.0, 500.0)),
                    },
                },
                RoomData {
                    location: Location::Garden,
                    name: "My Garden".to_string(),
                    background: "backgrounds/garden.png".to_string(),
                    walls: "garden".to_string(),
                    sizing: RoomSizing::Native(GARDEN_SIZE),
                    default_spawn: Vec2::new(50.0, 50.0),
                    prompt: RoomPrompt {
                        label: "Enter the Room".to_string(),
                        region: RegionSpec::RoomCenter { margin: 50.0 },
                        target: Location::Bedroom,
                        handover: None,
                    },
                },
            ],
        }
    }
}

impl RoomRegistry {
    pub fn get(&self, location: Location) -> Option<&RoomData> {
        self.rooms.iter().find(|room| room.location == location)
    }
}
