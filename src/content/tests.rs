//! Content domain: tests for wall file and config parsing.

use super::{GameConfig, WallLibrary, parse_game_config, parse_wall_spec};
use crate::core::TouchMode;

// -----------------------------------------------------------------------------
// Wall file tests
// -----------------------------------------------------------------------------

const ROOM_JSON: &str = r#"{
    "imageResolution": { "width": 1024, "height": 768 },
    "lines": [
        { "start": { "x": 0, "y": 300 }, "end": { "x": 1024, "y": 300 } },
        { "start": { "x": 10.5, "y": 20.25 }, "end": { "x": 10.5, "y": 700 } }
    ]
}"#;

#[test]
fn test_parse_wall_spec_fields() {
    let spec = parse_wall_spec(ROOM_JSON, "my_room.json").unwrap();

    assert_eq!(spec.image_resolution.width, 1024);
    assert_eq!(spec.image_resolution.height, 768);
    assert_eq!(spec.lines.len(), 2);
    assert_eq!(spec.lines[1].start.x, 10.5);
    assert_eq!(spec.lines[1].start.y, 20.25);
    assert_eq!(spec.lines[0].end.x, 1024.0);
}

#[test]
fn test_parse_wall_spec_without_lines() {
    let spec = parse_wall_spec(
        r#"{ "imageResolution": { "width": 64, "height": 64 } }"#,
        "empty.json",
    )
    .unwrap();

    assert!(spec.lines.is_empty());
    assert!(!spec.has_walls());
}

#[test]
fn test_parse_wall_spec_rejects_zero_resolution() {
    let err = parse_wall_spec(
        r#"{ "imageResolution": { "width": 0, "height": 64 }, "lines": [] }"#,
        "bad.json",
    )
    .unwrap_err();

    assert_eq!(err.file, "bad.json");
    assert!(err.message.contains("imageResolution"));
}

#[test]
fn test_parse_wall_spec_reports_syntax_errors() {
    let err = parse_wall_spec("{ not json", "broken.json").unwrap_err();
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_wall_library_lookup() {
    let mut library = WallLibrary::default();
    library.insert("my_room", parse_wall_spec(ROOM_JSON, "my_room.json").unwrap());

    assert_eq!(library.len(), 1);
    assert!(library.get("my_room").is_some());
    assert!(library.get("garden").is_none());
}

#[test]
fn test_wall_library_missing_dir_reports_error() {
    let mut library = WallLibrary::default();
    let errors = library.load_from_dir(std::path::Path::new("does/not/exist"));

    assert_eq!(errors.len(), 1);
    assert_eq!(library.len(), 0);
}

// -----------------------------------------------------------------------------
// Config file tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = parse_game_config("(player_speed: 300.0, touch_controls: Always)", "cfg.ron")
        .unwrap();

    assert_eq!(config.player_speed, 300.0);
    assert_eq!(config.touch_controls, TouchMode::Always);
    assert_eq!(config.jump_height, GameConfig::default().jump_height);
}

#[test]
fn test_parse_config_rejects_invalid_values() {
    let err = parse_game_config("(jump_height: 0.0)", "cfg.ron").unwrap_err();
    assert!(err.message.contains("jump_height"));
}
