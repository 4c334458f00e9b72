//! Debug tooling for the character controller (dev-tools feature).
//!
//! Features:
//! - Draw ground and wall probes as gizmos (toggle F2)
//! - Dump controller state as JSON to the log (F3)

mod state;

pub use state::DebugState;

use bevy::prelude::*;

use crate::controller::CharacterController;

const GROUND_PROBE_HIT: Color = Color::srgb(0.2, 0.9, 0.3);
const WALL_PROBE_HIT: Color = Color::srgb(0.2, 0.6, 1.0);
const PROBE_MISS: Color = Color::srgb(0.9, 0.3, 0.3);

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, dump_controller_snapshots).chain())
            .add_systems(
                Update,
                draw_probe_gizmos.run_if(|state: Res<DebugState>| state.draw_probes),
            );
    }
}

/// F2 toggles probe drawing
fn handle_debug_hotkeys(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.draw_probes = !debug_state.draw_probes;
        info!(
            "[DEBUG] Probe gizmos {}",
            if debug_state.draw_probes { "ON" } else { "OFF" }
        );
    }
}

/// F3 logs every controller's state as JSON
fn dump_controller_snapshots(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    query: Query<(Entity, &CharacterController)>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.snapshots_taken += 1;
    for (entity, controller) in &query {
        match serde_json::to_string(&controller.debug_snapshot()) {
            Ok(json) => info!(
                "[DEBUG] snapshot #{} {:?}: {}",
                debug_state.snapshots_taken, entity, json
            ),
            Err(e) => warn!("[DEBUG] could not serialize {:?}: {}", entity, e),
        }
    }
}

fn draw_probe_gizmos(mut gizmos: Gizmos, query: Query<&CharacterController>) {
    for controller in &query {
        let [ground, wall] = controller.probe_rays();

        let ground_color = if controller.grounded() {
            GROUND_PROBE_HIT
        } else {
            PROBE_MISS
        };
        let wall_color = if controller.wall_adjacent() {
            WALL_PROBE_HIT
        } else {
            PROBE_MISS
        };

        gizmos.line_2d(ground.origin, ground.end(), ground_color);
        gizmos.line_2d(wall.origin, wall.end(), wall_color);
    }
}
