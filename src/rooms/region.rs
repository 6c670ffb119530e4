//! Rooms domain: activation zones that gate the contextual action prompt.
//!
//! Regions are pure scene-space predicates. They are evaluated every frame
//! against the player's position and never mutate anything.

use bevy::prelude::*;

/// A resolved activation zone, in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// Horizontally near `center_x` and below the `threshold_y` line.
    NearDoor {
        center_x: f32,
        margin_x: f32,
        threshold_y: f32,
    },
    /// Inside the open square of half-size `margin` around `center`.
    NearCenter { center: Vec2, margin: f32 },
}

impl Region {
    /// All comparisons are strict, so points on the edge are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            Region::NearDoor {
                center_x,
                margin_x,
                threshold_y,
            } => (point.x - center_x).abs() < margin_x && point.y > threshold_y,
            Region::NearCenter { center, margin } => {
                (point.x - center.x).abs() < margin && (point.y - center.y).abs() < margin
            }
        }
    }
}

/// Region shape relative to the room size, resolved once the size is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionSpec {
    /// Door centred on the bottom edge, active within `band` of the bottom.
    BottomDoor { margin_x: f32, band: f32 },
    RoomCenter { margin: f32 },
}

impl RegionSpec {
    pub fn resolve(&self, room_size: Vec2) -> Region {
        match *self {
            RegionSpec::BottomDoor { margin_x, band } => Region::NearDoor {
                center_x: room_size.x * 0.5,
                margin_x,
                threshold_y: room_size.y - band,
            },
            RegionSpec::RoomCenter { margin } => Region::NearCenter {
                center: room_size * 0.5,
                margin,
            },
        }
    }
}
