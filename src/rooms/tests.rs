//! Rooms domain: tests for regions, room data and transition helpers.

use bevy::prelude::{UVec2, Vec2};
use std::time::Duration;

use super::{
    GARDEN_SIZE, Region, RegionSpec, RoomRegistry, RoomSizing, SpawnHandover, TransitionCooldown,
    bounds_rects, clamp_camera,
};
use crate::core::Location;

const DISPLAY: Vec2 = Vec2::new(800.0, 600.0);

fn door() -> Region {
    Region::NearDoor {
        center_x: 400.0,
        margin_x: 50.0,
        threshold_y: 500.0,
    }
}

// -----------------------------------------------------------------------------
// Region tests
// -----------------------------------------------------------------------------

#[test]
fn test_near_door_requires_strictly_below_threshold() {
    assert!(door().contains(Vec2::new(400.0, 501.0)));
    assert!(!door().contains(Vec2::new(400.0, 500.0)));
    assert!(!door().contains(Vec2::new(400.0, 499.0)));
}

#[test]
fn test_near_door_margin_is_exclusive() {
    assert!(door().contains(Vec2::new(449.0, 550.0)));
    assert!(!door().contains(Vec2::new(450.0, 550.0)));
    assert!(!door().contains(Vec2::new(350.0, 550.0)));
    assert!(door().contains(Vec2::new(351.0, 550.0)));
}

#[test]
fn test_near_center_square() {
    let region = Region::NearCenter {
        center: Vec2::new(800.0, 600.0),
        margin: 50.0,
    };
    assert!(region.contains(Vec2::new(800.0, 600.0)));
    assert!(region.contains(Vec2::new(849.0, 551.0)));
    assert!(!region.contains(Vec2::new(850.0, 600.0)));
    assert!(!region.contains(Vec2::new(800.0, 660.0)));
    // Diagonal corner of the square is still inside
    assert!(region.contains(Vec2::new(840.0, 640.0)));
}

#[test]
fn test_region_specs_resolve_against_room_size() {
    let door = RegionSpec::BottomDoor {
        margin_x: 50.0,
        band: 100.0,
    };
    assert_eq!(
        door.resolve(DISPLAY),
        Region::NearDoor {
            center_x: 400.0,
            margin_x: 50.0,
            threshold_y: 500.0
        }
    );

    let center = RegionSpec::RoomCenter { margin: 50.0 };
    assert_eq!(
        center.resolve(Vec2::new(1600.0, 1200.0)),
        Region::NearCenter {
            center: Vec2::new(800.0, 600.0),
            margin: 50.0
        }
    );
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_has_both_rooms() {
    let registry = RoomRegistry::default();
    assert!(registry.get(Location::Bedroom).is_some());
    assert!(registry.get(Location::Garden).is_some());
    assert!(registry.get(Location::Loading).is_none());
}

#[test]
fn test_bedroom_leads_to_garden_with_handover() {
    let registry = RoomRegistry::default();
    let bedroom = registry.get(Location::Bedroom).unwrap();

    assert_eq!(bedroom.walls, "my_room");
    assert_eq!(bedroom.default_spawn, Vec2::new(200.0, 450.0));
    assert_eq!(bedroom.prompt.label, "Leave Room?");
    assert_eq!(bedroom.prompt.target, Location::Garden);
    assert_eq!(bedroom.prompt.handover, Some(Vec2::new(500.0, 500.0)));
    assert!(bedroom.follows_display());
    assert_eq!(bedroom.size(DISPLAY), DISPLAY);
}

#[test]
fn test_garden_uses_native_size() {
    let registry = RoomRegistry::default();
    let garden = registry.get(Location::Garden).unwrap();

    assert_eq!(garden.sizing, RoomSizing::Native(GARDEN_SIZE));
    assert_eq!(garden.size(DISPLAY), Vec2::new(1600.0, 1200.0));
    assert!(!garden.follows_display());
    assert_eq!(garden.default_spawn, Vec2::new(50.0, 50.0));
    assert_eq!(garden.prompt.target, Location::Bedroom);
    assert_eq!(garden.prompt.handover, None);
}

#[test]
fn test_garden_size_constant() {
    assert_eq!(GARDEN_SIZE, UVec2::new(1600, 1200));
}

// -----------------------------------------------------------------------------
// Flow tests
// -----------------------------------------------------------------------------

#[test]
fn test_handover_is_used_once() {
    let mut handover = SpawnHandover {
        position: Some(Vec2::new(500.0, 500.0)),
    };
    assert_eq!(handover.take_or(Vec2::ZERO), Vec2::new(500.0, 500.0));
    assert_eq!(handover.take_or(Vec2::new(50.0, 50.0)), Vec2::new(50.0, 50.0));
}

#[test]
fn test_cooldown_blocks_until_elapsed() {
    let mut cooldown = TransitionCooldown::default();
    assert!(!cooldown.can_transition());

    cooldown.tick(Duration::from_millis(200));
    assert!(!cooldown.can_transition());

    cooldown.tick(Duration::from_millis(150));
    assert!(cooldown.can_transition());

    cooldown.reset();
    assert!(!cooldown.can_transition());
}

#[test]
fn test_camera_clamps_to_room_edges() {
    let room = Vec2::new(1600.0, 1200.0);

    assert_eq!(
        clamp_camera(Vec2::new(50.0, 50.0), DISPLAY, room),
        Vec2::new(400.0, 300.0)
    );
    assert_eq!(
        clamp_camera(Vec2::new(1590.0, 1190.0), DISPLAY, room),
        Vec2::new(1200.0, 900.0)
    );
    assert_eq!(
        clamp_camera(Vec2::new(700.0, 650.0), DISPLAY, room),
        Vec2::new(700.0, 650.0)
    );
}

#[test]
fn test_camera_centres_rooms_smaller_than_view() {
    assert_eq!(
        clamp_camera(Vec2::new(10.0, 590.0), DISPLAY, DISPLAY),
        Vec2::new(400.0, 300.0)
    );
}

#[test]
fn test_bounds_enclose_room_from_outside() {
    let rects = bounds_rects(DISPLAY, 32.0);

    for (center, size) in rects {
        let min = center - size * 0.5;
        let max = center + size * 0.5;
        // Each collider lies entirely outside the room interior
        let outside = max.y <= 0.0 || min.y >= DISPLAY.y || max.x <= 0.0 || min.x >= DISPLAY.x;
        assert!(outside, "{:?} overlaps the room", (center, size));
    }

    assert_eq!(rects[0], (Vec2::new(400.0, -16.0), Vec2::new(864.0, 32.0)));
    assert_eq!(rects[3], (Vec2::new(816.0, 300.0), Vec2::new(32.0, 664.0)));
}
