//! Movement domain: merging keyboard and touch state into one intent.

use bevy::prelude::*;

/// Level state of the four direction controls of one input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalState {
    /// `left` is checked first, so holding both resolves to left.
    fn axis_x(&self) -> Option<i8> {
        if self.left {
            Some(-1)
        } else if self.right {
            Some(1)
        } else {
            None
        }
    }

    /// `up` is checked first, so holding both resolves to up.
    fn axis_y(&self) -> Option<i8> {
        if self.up {
            Some(-1)
        } else if self.down {
            Some(1)
        } else {
            None
        }
    }
}

/// Desired direction per axis, each -1, 0 or 1. Scene convention: `dy = -1` is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputIntent {
    pub dx: i8,
    pub dy: i8,
}

impl InputIntent {
    pub const IDLE: InputIntent = InputIntent { dx: 0, dy: 0 };

    pub fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }

    /// Scene-space velocity. Diagonals are not normalized.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        Vec2::new(self.dx as f32 * speed, self.dy as f32 * speed)
    }
}

/// Resolve keyboard and optional touch state into an intent.
///
/// Touch, when present, overrides the keyboard one axis at a time: a pressed
/// touch `left`/`right` decides x, otherwise the keyboard does; `y` is decided
/// the same way independently.
pub fn resolve_intent(keyboard: DirectionalState, touch: Option<DirectionalState>) -> InputIntent {
    let touch = touch.unwrap_or_default();
    InputIntent {
        dx: touch.axis_x().or(keyboard.axis_x()).unwrap_or(0),
        dy: touch.axis_y().or(keyboard.axis_y()).unwrap_or(0),
    }
}
