//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::core::{ConfigError, GameConfig};
use crate::movement::intent::InputIntent;
use crate::movement::jump::JumpController;
use crate::movement::motion::{MotionController, WiggleTuning};

/// Movement parameters derived once from [`GameConfig`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub motion: MotionController,
    /// Idle controller cloned onto every spawned player
    pub jump: JumpController,
    pub body_radius: f32,
    pub sprite_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            motion: MotionController::default(),
            jump: JumpController::default(),
            body_radius: 28.0,
            sprite_scale: 2.0,
        }
    }
}

impl MovementTuning {
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let wiggle = WiggleTuning::new(config.wiggle_amplitude_deg, config.wiggle_half_period_ms)?;
        Ok(Self {
            motion: MotionController::new(config.player_speed, wiggle)?,
            jump: JumpController::new(
                config.jump_height,
                config.jump_duration_ms,
                config.fall_duration_ms,
            )?,
            body_radius: config.scaled_body_radius(),
            sprite_scale: config.player_scale,
        })
    }
}

/// Input sampled this frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub intent: InputIntent,
    /// Jump key went down this frame, or the touch jump latch is set
    pub jump_requested: bool,
    /// The request includes the touch latch, which must be cleared on start
    pub touch_jump: bool,
}
