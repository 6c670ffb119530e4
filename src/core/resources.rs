//! Core domain: immutable game configuration and its validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// When the on-screen touch buttons are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TouchMode {
    /// Enable the buttons once the first touch is seen
    #[default]
    Auto,
    Always,
    Never,
}

/// Tunables read once at startup from `assets/data/game_config.ron`.
///
/// The resource is inserted before the app runs and never mutated afterwards.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub display_width: u32,
    pub display_height: u32,
    /// Walking speed in pixels per second
    pub player_speed: f32,
    pub player_scale: f32,
    /// Radius of the circular hitbox before `player_scale` is applied
    pub player_body_radius: f32,
    pub jump_height: f32,
    pub jump_duration_ms: f32,
    pub fall_duration_ms: f32,
    /// Edge length of one wall obstacle in pixels
    pub wall_segment_size: f32,
    pub wiggle_amplitude_deg: f32,
    /// Time for one sweep from -amplitude to +amplitude
    pub wiggle_half_period_ms: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub touch_controls: TouchMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            display_width: 800,
            display_height: 600,
            player_speed: 240.0,
            player_scale: 2.0,
            player_body_radius: 14.0,
            jump_height: 40.0,
            jump_duration_ms: 200.0,
            fall_duration_ms: 150.0,
            wall_segment_size: 8.0,
            wiggle_amplitude_deg: 5.0,
            wiggle_half_period_ms: 200.0,
            music_volume: 0.5,
            sfx_volume: 0.6,
            touch_controls: TouchMode::Auto,
        }
    }
}

impl GameConfig {
    /// Check every numeric field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("display_width", self.display_width as f32)?;
        require_positive("display_height", self.display_height as f32)?;
        require_positive("player_speed", self.player_speed)?;
        require_positive("player_scale", self.player_scale)?;
        require_positive("player_body_radius", self.player_body_radius)?;
        require_positive("jump_height", self.jump_height)?;
        require_positive("jump_duration_ms", self.jump_duration_ms)?;
        require_positive("fall_duration_ms", self.fall_duration_ms)?;
        require_positive("wall_segment_size", self.wall_segment_size)?;
        require_positive("wiggle_amplitude_deg", self.wiggle_amplitude_deg)?;
        require_positive("wiggle_half_period_ms", self.wiggle_half_period_ms)?;
        require_unit_range("music_volume", self.music_volume)?;
        require_unit_range("sfx_volume", self.sfx_volume)?;
        Ok(())
    }

    /// Display size as a vector, used to scale walls for display-sized rooms.
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.display_width as f32, self.display_height as f32)
    }

    /// Hitbox radius in world pixels.
    pub fn scaled_body_radius(&self) -> f32 {
        self.player_body_radius * self.player_scale
    }
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f32 },
    OutOfRange { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{} must be within 0..=1, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Fails unless `value` is a finite number greater than zero.
pub fn require_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn require_unit_range(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

/// Where the active [`GameConfig`] came from, logged once the log plugin is up.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    File(String),
    Defaults { reason: String },
}
