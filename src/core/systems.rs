//! Core domain: startup and camera systems.

use bevy::prelude::*;

use crate::core::resources::{ConfigOrigin, GameConfig};
use crate::core::state::Location;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_config_origin(origin: Option<Res<ConfigOrigin>>, config: Res<GameConfig>) {
    match origin.as_deref() {
        Some(ConfigOrigin::File(path)) => info!("Loaded game config from {}", path),
        Some(ConfigOrigin::Defaults { reason }) => {
            warn!("Using default game config: {}", reason)
        }
        None => warn!("Game config origin unknown, assuming defaults"),
    }
    debug!("Active game config: {:?}", *config);
}

/// Leave the loading state once startup resources exist.
pub(crate) fn finish_loading(mut next_location: ResMut<NextState<Location>>) {
    next_location.set(Location::Bedroom);
}
