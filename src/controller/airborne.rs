//! Controller domain: grounded/airborne edge detection.

use bevy::log::debug;

use super::config::ControllerTuning;
use super::state::{CharacterState, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirborneEdge {
    Landed,
    LeftGround,
}

/// Compare the fresh `grounded` reading with the remembered airborne flag.
///
/// Leaving the ground while already falling arms the coyote window; landing grants
/// the double jump. The caller handles the buffered jump on `Landed`.
pub fn track(
    state: &mut CharacterState,
    tuning: &ControllerTuning,
    now: Timestamp,
) -> Option<AirborneEdge> {
    if state.grounded && state.airborne {
        state.airborne = false;
        // Coyote time belongs to the airborne stretch that just ended
        state.coyote.cancel();
        if tuning.abilities.double_jump {
            state.can_double_jump = true;
        }
        debug!(
            "Landed: can_double_jump={}, velocity={}",
            state.can_double_jump, state.velocity
        );
        return Some(AirborneEdge::Landed);
    }

    if !state.grounded && !state.airborne {
        state.airborne = true;
        if tuning.abilities.coyote_jump && state.velocity.y < 0.0 {
            state.coyote.arm(now, tuning.coyote_jump_window);
        }
        debug!(
            "Left ground: coyote_deadline={:?}, velocity={}",
            state.coyote.deadline(),
            state.velocity
        );
        return Some(AirborneEdge::LeftGround);
    }

    None
}
