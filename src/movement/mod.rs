//! Movement domain: plugin wiring that feeds the controller from bevy and avian2d.

mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
mod systems;

pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN};
pub use components::{AnimationParams, ContactReadings, GameLayer, Ground, Player};
pub use dev::spawn_test_room;
pub use events::ControllerEventMessage;
pub use resources::MovementInput;
pub use systems::SpatialProbe;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    bind_animation_params, drive_controllers, read_input, refresh_contacts,
    report_controller_events,
};

/// Per-frame controller pipeline; other domains order themselves around it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<ControllerEventMessage>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    drive_controllers,
                    refresh_contacts,
                    bind_animation_params,
                )
                    .chain()
                    .in_set(MovementSystems),
            )
            .add_systems(Update, report_controller_events.after(MovementSystems));
    }
}
