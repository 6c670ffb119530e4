//! Controls domain: tests for button ownership and layout.

use bevy::prelude::Vec2;

use super::{ButtonOwnership, TouchControls, VirtualButton, button_center, hit_test};
use crate::movement::DirectionalState;

const WINDOW: Vec2 = Vec2::new(800.0, 600.0);

// -----------------------------------------------------------------------------
// Ownership tests
// -----------------------------------------------------------------------------

#[test]
fn test_ownership_release_requires_owner() {
    let mut ownership = ButtonOwnership::default();
    ownership.claim(7);

    assert!(!ownership.release(8));
    assert_eq!(ownership.pressed_by, Some(7));
    assert!(ownership.release(7));
    assert_eq!(ownership.pressed_by, None);
}

#[test]
fn test_other_pointer_cannot_release_button() {
    let mut controls = TouchControls::default();
    controls.press(VirtualButton::Left, 1);

    assert!(!controls.release(VirtualButton::Left, 2));
    assert!(controls.is_pressed(VirtualButton::Left));

    assert!(controls.release(VirtualButton::Left, 1));
    assert!(!controls.is_pressed(VirtualButton::Left));
}

#[test]
fn test_latest_press_takes_ownership() {
    let mut controls = TouchControls::default();
    controls.press(VirtualButton::Up, 1);
    controls.press(VirtualButton::Up, 2);

    assert!(!controls.release(VirtualButton::Up, 1));
    assert!(controls.is_pressed(VirtualButton::Up));
    assert!(controls.release(VirtualButton::Up, 2));
}

#[test]
fn test_owned_by_lists_only_that_pointer() {
    let mut controls = TouchControls::default();
    controls.press(VirtualButton::Left, 1);
    controls.press(VirtualButton::Up, 1);
    controls.press(VirtualButton::Jump, 2);

    assert_eq!(
        controls.owned_by(1),
        vec![VirtualButton::Up, VirtualButton::Left]
    );
    assert_eq!(controls.owned_by(2), vec![VirtualButton::Jump]);
    assert!(controls.owned_by(3).is_empty());
}

#[test]
fn test_directions_reflect_pressed_buttons() {
    let mut controls = TouchControls::default();
    controls.press(VirtualButton::Right, 1);
    controls.press(VirtualButton::Down, 2);

    assert_eq!(
        controls.directions(),
        DirectionalState {
            up: false,
            down: true,
            left: false,
            right: true,
        }
    );
}

#[test]
fn test_jump_latch_survives_reads_until_cleared() {
    let mut controls = TouchControls::default();
    controls.press(VirtualButton::Jump, 4);

    assert!(controls.jump_latched());
    assert!(controls.jump_latched());

    controls.clear_jump();
    assert!(!controls.jump_latched());
    // Still held by the same finger until it lifts
    assert_eq!(controls.owner(VirtualButton::Jump).pressed_by, Some(4));
}

#[test]
fn test_jump_latch_cleared_when_owner_lifts() {
    let mut controls = TouchControls::default();
    controls.press(VirtualButton::Jump, 4);

    assert!(!controls.release(VirtualButton::Jump, 5));
    assert!(controls.jump_latched());

    assert!(controls.release(VirtualButton::Jump, 4));
    assert!(!controls.jump_latched());
}

#[test]
fn test_controls_start_inactive() {
    let mut controls = TouchControls::default();
    assert!(!controls.is_active());
    controls.activate();
    assert!(controls.is_active());
}

// -----------------------------------------------------------------------------
// Layout tests
// -----------------------------------------------------------------------------

#[test]
fn test_dpad_layout_matches_reference_positions() {
    assert_eq!(button_center(VirtualButton::Up, WINDOW), Vec2::new(100.0, 440.0));
    assert_eq!(button_center(VirtualButton::Down, WINDOW), Vec2::new(100.0, 560.0));
    assert_eq!(button_center(VirtualButton::Left, WINDOW), Vec2::new(40.0, 500.0));
    assert_eq!(button_center(VirtualButton::Right, WINDOW), Vec2::new(160.0, 500.0));
    assert_eq!(button_center(VirtualButton::Jump, WINDOW), Vec2::new(720.0, 500.0));
}

#[test]
fn test_hit_test_finds_button_under_pointer() {
    assert_eq!(
        hit_test(Vec2::new(105.0, 445.0), WINDOW),
        Some(VirtualButton::Up)
    );
    assert_eq!(
        hit_test(Vec2::new(700.0, 520.0), WINDOW),
        Some(VirtualButton::Jump)
    );
    assert_eq!(hit_test(Vec2::new(400.0, 300.0), WINDOW), None);
}

#[test]
fn test_hit_test_dpad_centre_is_empty() {
    // Gap between the four arrows
    assert_eq!(hit_test(Vec2::new(100.0, 500.0), WINDOW), None);
}
