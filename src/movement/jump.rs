//! Movement domain: the one-shot hop played when jump is pressed.
//!
//! A jump is a purely visual vertical offset: rise to `origin - height` with a
//! quadratic ease-out, then drop back to `origin` with a bounce ease-out. The
//! controller is ticked every frame; nothing is scheduled behind its back.

use bevy::math::curve::{Curve, easing::EaseFunction};
use bevy::prelude::*;

use crate::core::{ConfigError, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    Rising { origin: f32, elapsed: f32 },
    Falling { origin: f32, elapsed: f32 },
}

/// Phase change reported by [`JumpController::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpTransition {
    Falling,
    /// Back on the ground; `origin` is the exact offset to restore.
    Landed { origin: f32 },
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct JumpController {
    phase: JumpPhase,
    height: f32,
    rise_secs: f32,
    fall_secs: f32,
}

impl Default for JumpController {
    fn default() -> Self {
        Self {
            phase: JumpPhase::Idle,
            height: 40.0,
            rise_secs: 0.2,
            fall_secs: 0.15,
        }
    }
}

impl JumpController {
    pub fn new(height: f32, rise_ms: f32, fall_ms: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            phase: JumpPhase::Idle,
            height: require_positive("jump_height", height)?,
            rise_secs: require_positive("jump_duration_ms", rise_ms)? / 1000.0,
            fall_secs: require_positive("fall_duration_ms", fall_ms)? / 1000.0,
        })
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == JumpPhase::Idle
    }

    /// Start a jump from `origin`. Ignored unless idle.
    pub fn trigger(&mut self, origin: f32) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = JumpPhase::Rising {
            origin,
            elapsed: 0.0,
        };
        true
    }

    /// Advance the running sequence by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Option<JumpTransition> {
        match self.phase {
            JumpPhase::Idle => None,
            JumpPhase::Rising { origin, elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.rise_secs {
                    self.phase = JumpPhase::Falling {
                        origin,
                        elapsed: 0.0,
                    };
                    Some(JumpTransition::Falling)
                } else {
                    self.phase = JumpPhase::Rising { origin, elapsed };
                    None
                }
            }
            JumpPhase::Falling { origin, elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.fall_secs {
                    self.phase = JumpPhase::Idle;
                    Some(JumpTransition::Landed { origin })
                } else {
                    self.phase = JumpPhase::Falling { origin, elapsed };
                    None
                }
            }
        }
    }

    /// Current vertical position (scene space, `y` down), `None` while idle.
    pub fn offset(&self) -> Option<f32> {
        match self.phase {
            JumpPhase::Idle => None,
            JumpPhase::Rising { origin, elapsed } => {
                let t = elapsed / self.rise_secs;
                Some(origin - self.height * EaseFunction::QuadraticOut.sample_clamped(t))
            }
            JumpPhase::Falling { origin, elapsed } => {
                let t = elapsed / self.fall_secs;
                let apex = origin - self.height;
                Some(apex + self.height * EaseFunction::BounceOut.sample_clamped(t))
            }
        }
    }

    /// Abort an in-flight jump, returning the origin it started from.
    pub fn cancel(&mut self) -> Option<f32> {
        let origin = match self.phase {
            JumpPhase::Idle => None,
            JumpPhase::Rising { origin, .. } | JumpPhase::Falling { origin, .. } => Some(origin),
        };
        self.phase = JumpPhase::Idle;
        origin
    }
}
