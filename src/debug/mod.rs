//! Debug overlays for wall fields and activation regions.
//!
//! Only compiled with the `dev-tools` feature.
//! - F3: draw wall obstacles, room bounds and the prompt region
//! - F4: show player position, intent and jump phase

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use ui::DebugInfoOverlay;

use bevy::prelude::*;

use crate::debug::systems::{draw_debug_gizmos, toggle_debug_overlays, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_overlays)
            .add_systems(
                Update,
                draw_debug_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
