//! Loaders for the JSON wall files and the RON game config.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::WallSpec;
use crate::core::GameConfig;

/// Error type for content loading failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a wall file body. `file` is only used for error context.
pub fn parse_wall_spec(contents: &str, file: &str) -> Result<WallSpec, ContentLoadError> {
    let spec: WallSpec = serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })?;

    if !spec.image_resolution.is_valid() {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "imageResolution must be positive, got {}x{}",
                spec.image_resolution.width, spec.image_resolution.height
            ),
        });
    }

    Ok(spec)
}

pub fn load_wall_spec(path: &Path) -> Result<WallSpec, ContentLoadError> {
    let contents = read_file(path)?;
    parse_wall_spec(&contents, &path.display().to_string())
}

/// Parse a config body; fields left out keep their default values.
pub fn parse_game_config(contents: &str, file: &str) -> Result<GameConfig, ContentLoadError> {
    let config: GameConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    config.validate().map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Invalid value: {}", e),
    })?;

    Ok(config)
}

pub fn load_game_config(path: &Path) -> Result<GameConfig, ContentLoadError> {
    let contents = read_file(path)?;
    parse_game_config(&contents, &path.display().to_string())
}
