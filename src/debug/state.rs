//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether contact probes are drawn
    pub draw_probes: bool,
    /// Number of snapshots dumped so far, used to label log lines
    pub snapshots_taken: u32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            draw_probes: true,
            snapshots_taken: 0,
        }
    }
}
