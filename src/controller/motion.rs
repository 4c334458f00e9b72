//! Controller domain: wall slide, horizontal motion and facing.

use bevy::prelude::*;

use super::config::{ControllerTuning, FlipPolicy};
use super::state::{CharacterState, Facing};

fn touching_wall(state: &CharacterState, tuning: &ControllerTuning) -> bool {
    tuning.abilities.wall_interactions && state.wall_adjacent
}

/// Scale descent while pressed against a wall.
pub fn apply_wall_slide(state: &mut CharacterState, tuning: &ControllerTuning, axis: Vec2) {
    if !touching_wall(state, tuning) || state.velocity.y >= 0.0 {
        return;
    }

    let multiplier = if axis.y < 0.0 {
        tuning.wall_slide.held_multiplier
    } else {
        tuning.wall_slide.idle_multiplier
    };

    state.velocity.y *= multiplier;
}

/// Input drives horizontal speed directly; vertical speed is left alone.
pub fn apply_horizontal(state: &mut CharacterState, tuning: &ControllerTuning, axis: Vec2) {
    // Pushing into the wall would fight the wall slide
    if touching_wall(state, tuning) || state.is_wall_jumping {
        return;
    }

    state.velocity.x = axis.x * tuning.move_speed;
}

pub fn update_facing(state: &mut CharacterState, tuning: &ControllerTuning, axis: Vec2) {
    let intent = match tuning.flip_policy {
        FlipPolicy::Input => axis.x,
        FlipPolicy::Velocity => state.velocity.x,
    };

    if let Some(wanted) = Facing::from_sign(intent) {
        if wanted != state.facing {
            state.flip();
        }
    }
}
