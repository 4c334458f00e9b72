use avian2d::prelude::*;
use bevy::prelude::*;

use wallkick::{content, hazards, movement};

/// Pixels per second squared, tuned against the default jump forces.
const GRAVITY: f32 = 1800.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Wallkick".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
    .add_plugins((
        content::ContentPlugin::default(),
        movement::MovementPlugin,
        hazards::HazardsPlugin,
    ))
    .add_systems(Startup, (setup_camera, movement::spawn_test_room));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(wallkick::debug::DebugPlugin);

    app.run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
