//! Movement domain: components and physics layers for the walking avatar.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::intent::InputIntent;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Wall obstacles and room bounds
    Wall,
    /// Player character
    Player,
}

/// The physics body the player controls.
#[derive(Component, Debug)]
pub struct Player;

/// Visual child of the player. Jump and wiggle move this, never the body.
#[derive(Component, Debug)]
pub struct Avatar;

/// Direction the avatar looks in, one sprite sheet frame each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    /// Horizontal movement wins over vertical; no movement keeps the last facing.
    pub fn from_intent(intent: InputIntent) -> Option<Facing> {
        match (intent.dx, intent.dy) {
            (dx, _) if dx < 0 => Some(Facing::Left),
            (dx, _) if dx > 0 => Some(Facing::Right),
            (_, dy) if dy < 0 => Some(Facing::Up),
            (_, dy) if dy > 0 => Some(Facing::Down),
            _ => None,
        }
    }

    /// Frame in `jack.png`
    pub fn frame_index(self) -> usize {
        match self {
            Facing::Down => 0,
            Facing::Left => 1,
            Facing::Right => 2,
            Facing::Up => 3,
        }
    }
}
