//! Movement domain: velocity, facing and the wiggle shown while walking.

use bevy::math::curve::{Curve, easing::EaseFunction};
use bevy::prelude::*;

use crate::core::{ConfigError, require_positive};
use crate::movement::components::Facing;
use crate::movement::intent::InputIntent;

/// Shape of the walking wiggle: a sine-eased sweep between `-amplitude` and
/// `+amplitude` and back, repeated forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WiggleTuning {
    amplitude_deg: f32,
    half_period_secs: f32,
}

impl Default for WiggleTuning {
    fn default() -> Self {
        Self {
            amplitude_deg: 5.0,
            half_period_secs: 0.2,
        }
    }
}

impl WiggleTuning {
    pub fn new(amplitude_deg: f32, half_period_ms: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            amplitude_deg: require_positive("wiggle_amplitude_deg", amplitude_deg)?,
            half_period_secs: require_positive("wiggle_half_period_ms", half_period_ms)? / 1000.0,
        })
    }

    pub fn amplitude_deg(&self) -> f32 {
        self.amplitude_deg
    }

    /// Angle in degrees `elapsed` seconds into the oscillation.
    pub fn angle_at(&self, elapsed: f32) -> f32 {
        let half = self.half_period_secs;
        let cycle = elapsed.rem_euclid(2.0 * half);
        let progress = if cycle <= half {
            cycle / half
        } else {
            2.0 - cycle / half
        };
        let eased = EaseFunction::SineInOut.sample_clamped(progress);
        -self.amplitude_deg + 2.0 * self.amplitude_deg * eased
    }
}

/// A running wiggle. Dropping it is how the oscillation is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wiggle {
    elapsed: f32,
}

/// Wiggle start/stop, reported only on the frame movement starts or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiggleEdge {
    Started,
    Stopped,
}

/// Per-entity movement state.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct MotionState {
    pub facing: Facing,
    wiggle: Option<Wiggle>,
    angle_deg: f32,
    moving: bool,
}

impl MotionState {
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_wiggling(&self) -> bool {
        self.wiggle.is_some()
    }

    /// Current tilt in degrees, 0 when not wiggling.
    pub fn wiggle_angle(&self) -> f32 {
        self.angle_deg
    }
}

/// Result of feeding one intent into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    /// Scene-space velocity in pixels per second
    pub velocity: Vec2,
    pub wiggle: Option<WiggleEdge>,
}

/// Turns an intent into velocity and keeps [`MotionState`] in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionController {
    speed: f32,
    wiggle: WiggleTuning,
}

impl Default for MotionController {
    fn default() -> Self {
        Self {
            speed: 240.0,
            wiggle: WiggleTuning::default(),
        }
    }
}

impl MotionController {
    pub fn new(speed: f32, wiggle: WiggleTuning) -> Result<Self, ConfigError> {
        Ok(Self {
            speed: require_positive("player_speed", speed)?,
            wiggle,
        })
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn wiggle_tuning(&self) -> &WiggleTuning {
        &self.wiggle
    }

    pub fn drive(&self, state: &mut MotionState, intent: InputIntent) -> MotionStep {
        if let Some(facing) = Facing::from_intent(intent) {
            state.facing = facing;
        }

        let moving = intent.is_moving();
        let wiggle = match (state.wiggle.is_some(), moving) {
            (false, true) => {
                state.wiggle = Some(Wiggle::default());
                state.angle_deg = self.wiggle.angle_at(0.0);
                Some(WiggleEdge::Started)
            }
            (true, false) => {
                state.wiggle = None;
                state.angle_deg = 0.0;
                Some(WiggleEdge::Stopped)
            }
            _ => None,
        };
        state.moving = moving;

        MotionStep {
            velocity: intent.velocity(self.speed),
            wiggle,
        }
    }

    /// Advance a running wiggle by `dt` seconds and return the current angle.
    pub fn advance_wiggle(&self, state: &mut MotionState, dt: f32) -> f32 {
        if let Some(wiggle) = state.wiggle.as_mut() {
            wiggle.elapsed += dt;
            state.angle_deg = self.wiggle.angle_at(wiggle.elapsed);
        }
        state.angle_deg
    }
}
