//! Core domain: conversion between scene space and Bevy world space.
//!
//! Room data, wall files and region checks use scene space: origin at the
//! top-left corner of the room background, `y` growing downwards, the same
//! frame the authored images are digitized in. Bevy renders with `y` up, so
//! world positions are the scene positions with `y` negated.

use bevy::prelude::*;

pub fn scene_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

pub fn world_to_scene(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Centre of a room of the given size, in world space.
pub fn room_center_world(size: Vec2) -> Vec2 {
    scene_to_world(size * 0.5)
}
