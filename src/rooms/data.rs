//! Rooms domain: room definitions.

use bevy::prelude::*;

use crate::core::Location;
use crate::rooms::region::RegionSpec;

/// How a room's world size is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoomSizing {
    /// Background stretched over the display; walls follow window resizes
    Display,
    /// Background drawn at its native pixel size with a following camera
    Native(UVec2),
}

/// The contextual action offered in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPrompt {
    pub label: String,
    pub region: RegionSpec,
    /// Room entered when the prompt is activated
    pub target: Location,
    /// Scene position handed to the target room; `None` uses its default spawn
    pub handover: Option<Vec2>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomData {
    pub location: Location,
    pub name: String,
    pub background: String,
    /// Key into the wall library (file stem under `assets/walls`)
    pub walls: String,
    pub sizing: RoomSizing,
    pub default_spawn: Vec2,
    pub prompt: RoomPrompt,
}

impl RoomData {
    /// World size of the room for the given display size.
    pub fn size(&self, display_size: Vec2) -> Vec2 {
        match self.sizing {
            RoomSizing::Display => display_size,
            RoomSizing::Native(size) => size.as_vec2(),
        }
    }

    pub fn follows_display(&self) -> bool {
        self.sizing == RoomSizing::Display
    }
}
