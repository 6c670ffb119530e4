//! Controls domain: reading touches and drawing the virtual buttons.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::controls::layout::{BUTTON_SIZE, button_center, button_rect, hit_test};
use crate::controls::touch::{TouchControls, VirtualButton};
use crate::core::{GameConfig, TouchMode};

/// UI node drawing one virtual button.
#[derive(Component, Debug)]
pub struct TouchButton(pub VirtualButton);

pub(crate) fn setup_touch_mode(config: Res<GameConfig>, mut controls: ResMut<TouchControls>) {
    if config.touch_controls == TouchMode::Always {
        controls.activate();
        info!("Virtual touch buttons enabled by config");
    }
}

pub(crate) fn read_touches(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
    mut controls: ResMut<TouchControls>,
) {
    if config.touch_controls == TouchMode::Never {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let window_size = Vec2::new(window.width(), window.height());

    for touch in touches.iter_just_pressed() {
        if !controls.is_active() {
            controls.activate();
            info!("Touch input detected, enabling virtual buttons");
        }
        if let Some(button) = hit_test(touch.position(), window_size) {
            controls.press(button, touch.id());
        }
    }

    // A finger sliding off a button releases it
    for touch in touches.iter() {
        for button in controls.owned_by(touch.id()) {
            if !button_rect(button, window_size).contains(touch.position()) {
                controls.release(button, touch.id());
            }
        }
    }

    for touch in touches
        .iter_just_released()
        .chain(touches.iter_just_canceled())
    {
        if let Some(button) = hit_test(touch.position(), window_size) {
            if !controls.release(button, touch.id()) && controls.is_pressed(button) {
                debug!(
                    "Ignoring release of {:?} by pointer {}, held by {:?}",
                    button,
                    touch.id(),
                    controls.owner(button).pressed_by
                );
            }
        }
        for button in controls.owned_by(touch.id()) {
            controls.release(button, touch.id());
        }
    }
}

pub(crate) fn spawn_touch_buttons(
    mut commands: Commands,
    controls: Res<TouchControls>,
    existing: Query<(), With<TouchButton>>,
) {
    if !controls.is_active() || !existing.is_empty() {
        return;
    }

    for button in VirtualButton::ALL {
        commands
            .spawn((
                TouchButton(button),
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(BUTTON_SIZE),
                    height: Val::Px(BUTTON_SIZE),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(button.label()),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
    }
}

/// Keep button nodes anchored to the window corners and tint pressed ones.
pub(crate) fn update_touch_buttons(
    controls: Res<TouchControls>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut buttons: Query<(&TouchButton, &mut Node, &mut BackgroundColor)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let window_size = Vec2::new(window.width(), window.height());

    for (TouchButton(button), mut node, mut color) in &mut buttons {
        let top_left = button_center(*button, window_size) - Vec2::splat(BUTTON_SIZE * 0.5);
        node.left = Val::Px(top_left.x);
        node.top = Val::Px(top_left.y);

        let held = controls.owner(*button).pressed_by.is_some();
        color.0 = if held {
            Color::srgba(1.0, 1.0, 1.0, 0.35)
        } else {
            Color::srgba(0.0, 0.0, 0.0, 0.5)
        };
    }
}
