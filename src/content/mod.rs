//! Content domain: authored wall data and game configuration files.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{ImageResolution, PointDef, SegmentDef, WallSpec};
pub use loader::{
    ContentLoadError, load_game_config, load_wall_spec, parse_game_config, parse_wall_spec,
};

use bevy::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{ConfigOrigin, GameConfig};

pub const CONFIG_PATH: &str = "assets/data/game_config.ron";
pub const WALLS_DIR: &str = "assets/walls";

/// Wall specs keyed by file stem (`my_room`, `garden`).
#[derive(Resource, Debug, Default)]
pub struct WallLibrary {
    specs: HashMap<String, WallSpec>,
}

impl WallLibrary {
    pub fn insert(&mut self, key: impl Into<String>, spec: WallSpec) {
        self.specs.insert(key.into(), spec);
    }

    pub fn get(&self, key: &str) -> Option<&WallSpec> {
        self.specs.get(key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Load every `*.json` file in `dir`. Unreadable files are logged and skipped.
    pub fn load_from_dir(&mut self, dir: &Path) -> Vec<ContentLoadError> {
        let mut errors = Vec::new();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                errors.push(ContentLoadError {
                    file: dir.display().to_string(),
                    message: format!("IO error: {}", e),
                });
                return errors;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match load_wall_spec(&path) {
                Ok(spec) => {
                    debug!("Loaded {} wall lines from {}", spec.lines.len(), path.display());
                    self.insert(key, spec);
                }
                Err(e) => errors.push(e),
            }
        }

        errors
    }
}

/// Read the config file, falling back to defaults if it is missing or invalid.
///
/// Runs before the app exists, so the outcome is returned as a
/// [`ConfigOrigin`] and logged by a startup system instead.
pub fn load_config_or_default(path: &Path) -> (GameConfig, ConfigOrigin) {
    match load_game_config(path) {
        Ok(config) => (config, ConfigOrigin::File(path.display().to_string())),
        Err(e) => (
            GameConfig::default(),
            ConfigOrigin::Defaults {
                reason: e.to_string(),
            },
        ),
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WallLibrary>()
            .add_systems(Startup, load_wall_library);
    }
}

fn load_wall_library(mut library: ResMut<WallLibrary>) {
    for error in library.load_from_dir(Path::new(WALLS_DIR)) {
        // A room without its wall file simply has no walls
        warn!("{}", error);
    }
    info!("Loaded {} wall specs from {}", library.len(), WALLS_DIR);
}
