//! Core domain: state definitions for the walk-around flow.

use bevy::prelude::*;

/// Which room the player is currently standing in.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum Location {
    /// Startup resources are still being inserted
    #[default]
    Loading,
    Bedroom,
    Garden,
}

impl Location {
    /// Rooms the player can actually be in.
    pub fn is_room(self) -> bool {
        !matches!(self, Location::Loading)
    }
}
