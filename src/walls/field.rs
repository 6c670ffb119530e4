//! Walls domain: turning authored wall lines into square obstacles.

use bevy::prelude::*;

use crate::content::WallSpec;
use crate::core::{ConfigError, require_positive};

/// One square collision cell, centred at `(x, y)` in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Obstacle {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Builds the obstacle field for a room from its [`WallSpec`].
///
/// Lines are scaled from image resolution to display size with independent
/// x and y factors, then sampled every half obstacle so neighbouring cells
/// overlap and leave no gaps at any scale.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WallFieldBuilder {
    segment_size: f32,
}

impl Default for WallFieldBuilder {
    fn default() -> Self {
        Self { segment_size: 8.0 }
    }
}

impl WallFieldBuilder {
    pub fn new(segment_size: f32) -> Result<Self, ConfigError> {
        let segment_size = require_positive("wall_segment_size", segment_size)?;
        Ok(Self { segment_size })
    }

    pub fn segment_size(&self) -> f32 {
        self.segment_size
    }

    /// Distance between neighbouring obstacle centres.
    pub fn step(&self) -> f32 {
        self.segment_size * 0.5
    }

    /// Build the whole field. A missing spec or one without lines yields no
    /// obstacles.
    pub fn build(&self, spec: Option<&WallSpec>, display_size: Vec2) -> Vec<Obstacle> {
        let Some(spec) = spec.filter(|spec| spec.has_walls()) else {
            return Vec::new();
        };
        if !spec.image_resolution.is_valid() {
            return Vec::new();
        }

        let scale = display_size / spec.image_resolution.as_vec2();

        let mut obstacles = Vec::new();
        for line in &spec.lines {
            let start = Vec2::from(line.start) * scale;
            let end = Vec2::from(line.end) * scale;
            obstacles.extend(self.obstacles_along(start, end));
        }
        obstacles
    }

    /// Number of intervals a scaled line of `length` is split into.
    pub fn interval_count(&self, length: f32) -> usize {
        ((length / self.step()).ceil() as usize).max(1)
    }

    /// Obstacles for one already-scaled line, both endpoints included.
    /// A zero-length line still yields two obstacles on the same point.
    pub fn obstacles_along(&self, start: Vec2, end: Vec2) -> impl Iterator<Item = Obstacle> {
        let delta = end - start;
        let count = self.interval_count(delta.length());
        let size = self.segment_size;

        (0..=count).map(move |i| {
            let t = i as f32 / count as f32;
            let p = start + delta * t;
            Obstacle { x: p.x, y: p.y, size }
        })
    }
}
