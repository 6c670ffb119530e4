mod content;
mod controls;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod rooms;
mod walls;

use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let (config, origin) = content::load_config_or_default(Path::new(content::CONFIG_PATH));

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "roomwalk".to_string(),
                    resolution: WindowResolution::new(config.display_width, config.display_height),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::ZERO))
    .insert_resource(config)
    .insert_resource(origin)
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        walls::WallsPlugin,
        movement::MovementPlugin,
        controls::ControlsPlugin,
        rooms::RoomsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
