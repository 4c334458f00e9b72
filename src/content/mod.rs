//! Content domain: data-driven controller tuning.

mod loader;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::PathBuf;

use crate::controller::ControllerTuning;

pub use loader::{ContentLoadError, load_controller_tuning};

/// Default location of the player's tuning file.
pub const PLAYER_TUNING_FILE: &str = "assets/data/controller.ron";

/// Tuning the player is spawned with.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerTuning(pub ControllerTuning);

pub struct ContentPlugin {
    pub tuning_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            tuning_path: PathBuf::from(PLAYER_TUNING_FILE),
        }
    }
}

#[derive(Resource, Debug, Clone)]
struct TuningSource(PathBuf);

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TuningSource(self.tuning_path.clone()))
            .init_resource::<PlayerTuning>()
            .add_systems(PreStartup, load_player_tuning);
    }
}

fn load_player_tuning(source: Res<TuningSource>, mut tuning: ResMut<PlayerTuning>) {
    match load_controller_tuning(&source.0) {
        Ok(loaded) => {
            info!(
                "Loaded player tuning from {}: move_speed={}, jump_force={}, abilities={:?}",
                source.0.display(),
                loaded.move_speed,
                loaded.jump_force,
                loaded.abilities
            );
            tuning.0 = loaded;
        }
        Err(e) => {
            warn!("{}; using default player tuning", e);
            tuning.0 = ControllerTuning::default();
        }
    }
}
