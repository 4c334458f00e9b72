//! Movement domain: debug test room for trying out the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hazards::{DamageTrigger, PushSide};
use crate::movement::{GameLayer, Ground};

fn spawn_block(commands: &mut Commands, color: Color, center: Vec2, size: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor and outer walls
    spawn_block(
        &mut commands,
        ground_color,
        Vec2::new(0.0, -200.0),
        Vec2::new(800.0, 40.0),
    );
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(-420.0, 50.0),
        Vec2::new(40.0, 500.0),
    );
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(420.0, 50.0),
        Vec2::new(40.0, 500.0),
    );

    // Platforms at increasing heights, reachable with a double jump
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(-250.0, -50.0),
        Vec2::new(150.0, 20.0),
    );
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(250.0, 50.0),
        Vec2::new(150.0, 20.0),
    );
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(0.0, 150.0),
        Vec2::new(120.0, 20.0),
    );

    // Pillar for wall jumping practice
    spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(-100.0, -80.0),
        Vec2::new(30.0, 200.0),
    );

    // Spikes on the floor
    commands.spawn((
        DamageTrigger {
            push: PushSide::AwayFromTrigger,
        },
        Sprite {
            color: Color::srgb(0.8, 0.2, 0.2),
            custom_size: Some(Vec2::new(60.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(200.0, -174.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(60.0, 12.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));
}
