//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlayerTuning;
use crate::controller::{CharacterController, ControllerTuning, Facing};
use crate::movement::{AnimationParams, ContactReadings, GameLayer, Player};

pub const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, 100.0);
pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player with a controller built from `PlayerTuning`.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = CharacterController::spawn(tuning.0.clone(), PLAYER_SPAWN, Facing::Right)
        .or_else(|e| {
            warn!("Player tuning rejected ({}), using defaults", e);
            CharacterController::spawn(ControllerTuning::default(), PLAYER_SPAWN, Facing::Right)
        });
    let Ok(controller) = controller else {
        error!("Default controller tuning failed validation, player not spawned");
        return;
    };

    info!(
        "Spawning player at {}: move_speed={}, jump_force={}, double_jump={}, wall_interactions={}",
        PLAYER_SPAWN,
        controller.tuning().move_speed,
        controller.tuning().jump_force,
        controller.tuning().abilities.double_jump,
        controller.tuning().abilities.wall_interactions
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            controller,
            ContactReadings::default(),
            AnimationParams::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Hazard]),
        ),
    ));
}
