//! Rooms domain: events for room transitions.

use bevy::ecs::message::Message;

use crate::core::Location;

#[derive(Debug)]
pub struct RoomEnteredEvent {
    pub location: Location,
}

impl Message for RoomEnteredEvent {}

/// The player activated the room's action prompt
#[derive(Debug)]
pub struct RoomExitRequested {
    pub from: Location,
}

impl Message for RoomExitRequested {}
