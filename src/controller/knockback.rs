//! Controller domain: the knockback override.

use bevy::log::debug;

use super::config::ControllerTuning;
use super::output::ControllerEvent;
use super::state::{CharacterState, Facing, Timestamp};

/// Start a knockback unless one is already running.
///
/// `from` is the side the hit came from; `None` means the side the character faces.
/// Returns whether a new knockback started.
pub fn apply(
    state: &mut CharacterState,
    tuning: &ControllerTuning,
    now: Timestamp,
    from: Option<Facing>,
) -> bool {
    if !tuning.abilities.knockback {
        return false;
    }

    if state.knockback_lock.is_open(now) {
        return false;
    }

    let from = from.unwrap_or(state.facing);

    state.is_knocked = true;
    state.knockback_lock.arm(now, tuning.knockback_duration);
    state.wall_jump_lock.cancel();
    state.is_wall_jumping = false;
    state.velocity.x = tuning.knockback_force.x * -from.sign();
    state.velocity.y = tuning.knockback_force.y;
    state.pending_impulse = Some(state.velocity);
    state.pending_events.insert(ControllerEvent::KnockedBack);

    debug!(
        "Knocked back from {:?}: velocity={}, until={:?}",
        from,
        state.velocity,
        state.knockback_lock.deadline()
    );
    true
}

/// Clear timed overrides whose deadline has passed.
pub fn release_expired(state: &mut CharacterState, now: Timestamp) {
    if state.knockback_lock.expire(now) {
        state.is_knocked = false;
        debug!("Knockback released");
    }

    if state.wall_jump_lock.expire(now) {
        state.is_wall_jumping = false;
    }
}
