//! Rooms domain: active room tracking and transition guards.

use bevy::prelude::*;

use crate::core::Location;
use crate::rooms::region::Region;

/// The room currently on screen.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActiveRoom {
    pub location: Location,
    /// Scene-space size, also the world bounds
    pub size: Vec2,
    pub region: Region,
    pub prompt_visible: bool,
}

/// Scene position the next room spawns the player at.
#[derive(Resource, Debug, Default)]
pub struct SpawnHandover {
    pub position: Option<Vec2>,
}

impl SpawnHandover {
    pub fn take_or(&mut self, fallback: Vec2) -> Vec2 {
        self.position.take().unwrap_or(fallback)
    }
}

/// Cooldown timer to prevent rapid/double transitions between rooms
#[derive(Resource, Debug)]
pub struct TransitionCooldown {
    pub timer: Timer,
}

impl Default for TransitionCooldown {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.3, TimerMode::Once),
        }
    }
}

impl TransitionCooldown {
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }

    pub fn can_transition(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }
}

/// Camera centre (scene space) that keeps a `view`-sized window inside the
/// room while tracking `target`. Axes where the room is smaller than the view
/// stay centred on the room.
pub fn clamp_camera(target: Vec2, view: Vec2, room: Vec2) -> Vec2 {
    let clamp_axis = |target: f32, view: f32, room: f32| {
        if room <= view {
            room * 0.5
        } else {
            target.clamp(view * 0.5, room - view * 0.5)
        }
    };
    Vec2::new(
        clamp_axis(target.x, view.x, room.x),
        clamp_axis(target.y, view.y, room.y),
    )
}

/// Centres and sizes (scene space) of the four edge colliders enclosing a room.
pub fn bounds_rects(room: Vec2, thickness: f32) -> [(Vec2, Vec2); 4] {
    let half = thickness * 0.5;
    let horizontal = Vec2::new(room.x + thickness * 2.0, thickness);
    let vertical = Vec2::new(thickness, room.y + thickness * 2.0);
    [
        (Vec2::new(room.x * 0.5, -half), horizontal),
        (Vec2::new(room.x * 0.5, room.y + half), horizontal),
        (Vec2::new(-half, room.y * 0.5), vertical),
        (Vec2::new(room.x + half, room.y * 0.5), vertical),
    ]
}
