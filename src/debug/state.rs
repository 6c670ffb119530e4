//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking which debug overlays are on
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Wall obstacles, room bounds and the action region as gizmos
    pub show_gizmos: bool,
    /// Text overlay with player position, intent and jump phase
    pub show_info: bool,
}
