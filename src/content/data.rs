//! Data definitions for authored wall files.
//!
//! These structs mirror `assets/walls/*.json`, which are digitized against the
//! room background image. Coordinates are in image pixels, `y` down.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// One straight wall line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SegmentDef {
    pub start: PointDef,
    pub end: PointDef,
}

/// Size of the image the lines were digitized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageResolution {
    pub width: u32,
    pub height: u32,
}

impl ImageResolution {
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Full collision description for one background image.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSpec {
    pub image_resolution: ImageResolution,
    /// May be empty or absent: a background can have no walls.
    #[serde(default)]
    pub lines: Vec<SegmentDef>,
}

impl WallSpec {
    pub fn has_walls(&self) -> bool {
        !self.lines.is_empty()
    }
}
