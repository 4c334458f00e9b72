//! Controller domain: jump resolution, coyote time and jump buffering.

use bevy::log::debug;

use super::config::ControllerTuning;
use super::output::ControllerEvent;
use super::state::{CharacterState, Timestamp};

/// Which jump a press resolves to. The chain always ends in `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
    Double,
    None,
}

impl JumpKind {
    pub fn event(self) -> Option<ControllerEvent> {
        match self {
            JumpKind::Ground => Some(ControllerEvent::Jumped),
            JumpKind::Wall => Some(ControllerEvent::WallJumped),
            JumpKind::Double => Some(ControllerEvent::DoubleJumped),
            JumpKind::None => None,
        }
    }
}

/// First matching branch wins: ground (or coyote), wall, double, nothing.
pub fn select(state: &CharacterState, tuning: &ControllerTuning, now: Timestamp) -> JumpKind {
    let coyote_open = tuning.abilities.coyote_jump && state.coyote.is_open(now);

    if state.grounded || coyote_open {
        JumpKind::Ground
    } else if tuning.abilities.wall_interactions && state.wall_adjacent && !state.grounded {
        JumpKind::Wall
    } else if tuning.abilities.double_jump && state.can_double_jump {
        JumpKind::Double
    } else {
        JumpKind::None
    }
}

pub fn perform(
    state: &mut CharacterState,
    tuning: &ControllerTuning,
    kind: JumpKind,
    now: Timestamp,
) -> Option<ControllerEvent> {
    match kind {
        JumpKind::Ground => {
            state.velocity.y = tuning.jump_force;
            // Coyote time is good for one jump per window
            state.coyote.cancel();
            debug!(
                "Ground jump: grounded={}, velocity={}",
                state.grounded, state.velocity
            );
        }
        JumpKind::Wall => {
            if tuning.abilities.double_jump {
                state.can_double_jump = true;
            }
            state.velocity.x = tuning.wall_jump_force.x * -state.facing.sign();
            state.velocity.y = tuning.wall_jump_force.y;
            state.flip();
            state.wall_jump_lock.arm(now, tuning.wall_jump_duration);
            state.is_wall_jumping = true;
            debug!(
                "Wall jump: facing={:?}, lock_until={:?}",
                state.facing,
                state.wall_jump_lock.deadline()
            );
        }
        JumpKind::Double => {
            state.wall_jump_lock.cancel();
            state.is_wall_jumping = false;
            state.can_double_jump = false;
            state.velocity.y = tuning.double_jump_force;
            debug!("Double jump: velocity={}", state.velocity);
        }
        JumpKind::None => {}
    }

    kind.event()
}

/// Handle a jump press. Presses made while airborne are also remembered in the
/// jump buffer, whatever they resolved to.
pub fn request(
    state: &mut CharacterState,
    tuning: &ControllerTuning,
    now: Timestamp,
) -> Option<ControllerEvent> {
    let was_airborne = state.airborne;
    let kind = select(state, tuning, now);
    let event = perform(state, tuning, kind, now);

    if was_airborne && tuning.abilities.jump_buffer {
        state.jump_buffer.arm(now, tuning.buffer_jump_window);
    }

    event
}

/// Called on landing: fire a ground jump if a press is still buffered.
pub fn try_buffered(
    state: &mut CharacterState,
    tuning: &ControllerTuning,
    now: Timestamp,
) -> Option<ControllerEvent> {
    if !tuning.abilities.jump_buffer || !state.jump_buffer.consume(now) {
        return None;
    }

    debug!("Buffered jump released on landing");
    perform(state, tuning, JumpKind::Ground, now)
}
