//! Walls domain: tests for obstacle field synthesis.

use bevy::prelude::Vec2;

use super::{Obstacle, WallFieldBuilder};
use crate::content::{ImageResolution, PointDef, SegmentDef, WallSpec};
use crate::core::ConfigError;

const EPSILON: f32 = 1e-4;

fn spec(width: u32, height: u32, lines: &[((f32, f32), (f32, f32))]) -> WallSpec {
    WallSpec {
        image_resolution: ImageResolution { width, height },
        lines: lines
            .iter()
            .map(|&((sx, sy), (ex, ey))| SegmentDef {
                start: PointDef { x: sx, y: sy },
                end: PointDef { x: ex, y: ey },
            })
            .collect(),
    }
}

fn assert_near(obstacle: &Obstacle, x: f32, y: f32) {
    assert!(
        (obstacle.x - x).abs() < EPSILON && (obstacle.y - y).abs() < EPSILON,
        "expected ({}, {}), got ({}, {})",
        x,
        y,
        obstacle.x,
        obstacle.y
    );
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_builder_rejects_non_positive_size() {
    assert_eq!(
        WallFieldBuilder::new(0.0),
        Err(ConfigError::NonPositive {
            field: "wall_segment_size",
            value: 0.0
        })
    );
    assert!(WallFieldBuilder::new(-4.0).is_err());
}

#[test]
fn test_step_is_half_the_segment_size() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    assert_eq!(builder.step(), 4.0);
}

// -----------------------------------------------------------------------------
// Missing data
// -----------------------------------------------------------------------------

#[test]
fn test_missing_spec_builds_nothing() {
    let builder = WallFieldBuilder::default();
    assert!(builder.build(None, Vec2::new(800.0, 600.0)).is_empty());
}

#[test]
fn test_spec_without_lines_builds_nothing() {
    let builder = WallFieldBuilder::default();
    let empty = spec(100, 100, &[]);
    assert!(builder.build(Some(&empty), Vec2::new(800.0, 600.0)).is_empty());
}

#[test]
fn test_invalid_resolution_builds_nothing() {
    let builder = WallFieldBuilder::default();
    let bad = spec(0, 100, &[((0.0, 0.0), (10.0, 0.0))]);
    assert!(builder.build(Some(&bad), Vec2::new(800.0, 600.0)).is_empty());
}

// -----------------------------------------------------------------------------
// Sampling
// -----------------------------------------------------------------------------

#[test]
fn test_count_plus_one_obstacles_from_start_to_end() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    // Length 30 with step 4 => ceil(7.5) = 8 intervals
    let obstacles: Vec<_> = builder
        .obstacles_along(Vec2::new(10.0, 20.0), Vec2::new(28.0, 44.0))
        .collect();

    assert_eq!(builder.interval_count(30.0), 8);
    assert_eq!(obstacles.len(), 9);
    assert_near(&obstacles[0], 10.0, 20.0);
    assert_near(&obstacles[8], 28.0, 44.0);
    assert!(obstacles.iter().all(|o| o.size == 8.0));
}

#[test]
fn test_short_segment_still_uses_one_interval() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    let obstacles: Vec<_> = builder
        .obstacles_along(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))
        .collect();

    assert_eq!(obstacles.len(), 2);
    assert_near(&obstacles[0], 0.0, 0.0);
    assert_near(&obstacles[1], 1.0, 0.0);
}

#[test]
fn test_zero_length_segment_yields_two_obstacles_on_one_point() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    let point = spec(100, 100, &[((40.0, 60.0), (40.0, 60.0))]);
    let obstacles = builder.build(Some(&point), Vec2::new(100.0, 100.0));

    assert_eq!(obstacles.len(), 2);
    assert_eq!(obstacles[0], obstacles[1]);
    assert_near(&obstacles[0], 40.0, 60.0);
}

#[test]
fn test_obstacles_from_several_lines_are_concatenated() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    let two = spec(
        100,
        100,
        &[((0.0, 0.0), (8.0, 0.0)), ((50.0, 50.0), (50.0, 50.0))],
    );
    // 8 / 4 = 2 intervals => 3 obstacles, plus 2 for the degenerate line
    assert_eq!(builder.build(Some(&two), Vec2::new(100.0, 100.0)).len(), 5);
}

// -----------------------------------------------------------------------------
// Scaling
// -----------------------------------------------------------------------------

#[test]
fn test_non_uniform_scale_is_applied_per_axis() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    let diagonal = spec(100, 200, &[((10.0, 20.0), (30.0, 60.0))]);
    // scaleX = 3, scaleY = 0.5
    let obstacles = builder.build(Some(&diagonal), Vec2::new(300.0, 100.0));

    let start = Vec2::new(10.0 * 3.0, 20.0 * 0.5);
    let end = Vec2::new(30.0 * 3.0, 60.0 * 0.5);
    let count = obstacles.len() - 1;
    assert_eq!(count, builder.interval_count(start.distance(end)));

    for (i, obstacle) in obstacles.iter().enumerate() {
        let t = i as f32 / count as f32;
        let expected = start + (end - start) * t;
        assert_near(obstacle, expected.x, expected.y);
    }
}

#[test]
fn test_length_is_measured_after_scaling() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    // Authored as 10px vertical, displayed 10x taller => 100px => 25 intervals
    let vertical = spec(100, 100, &[((0.0, 0.0), (0.0, 10.0))]);
    let obstacles = builder.build(Some(&vertical), Vec2::new(100.0, 1000.0));

    assert_eq!(obstacles.len(), 26);
    assert_near(obstacles.last().unwrap(), 0.0, 100.0);
}

#[test]
fn test_end_to_end_reference_room() {
    let builder = WallFieldBuilder::new(8.0).unwrap();
    let room = spec(100, 100, &[((0.0, 0.0), (100.0, 0.0))]);
    let obstacles = builder.build(Some(&room), Vec2::new(200.0, 50.0));

    assert_eq!(obstacles.len(), 51);
    for (i, obstacle) in obstacles.iter().enumerate() {
        assert_near(obstacle, i as f32 * 4.0, 0.0);
        assert_eq!(obstacle.size, 8.0);
    }
}
