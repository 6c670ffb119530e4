//! Rooms domain: entity components and markers for room flow.

use bevy::prelude::*;

/// Despawned when the room it belongs to is left
#[derive(Component, Debug)]
pub struct RoomScoped;

/// Room background sprite
#[derive(Component, Debug)]
pub struct RoomBackground;

/// Static collider along one edge of the room
#[derive(Component, Debug)]
pub struct RoomBounds;

/// Root node of the contextual action prompt
#[derive(Component, Debug)]
pub struct ActionPrompt;

/// The pressable part of the [`ActionPrompt`]
#[derive(Component, Debug)]
pub struct PromptButton;
