//! Walls domain: requests to (re)build the obstacle field.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Ask for the obstacle field to be rebuilt from the named wall spec,
/// scaled to `display_size`.
#[derive(Debug, Clone)]
pub struct BuildWallField {
    pub spec_key: Option<String>,
    pub display_size: Vec2,
}

impl Message for BuildWallField {}
