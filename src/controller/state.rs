//! Controller domain: clock, orientation and the mutable character state.

use bevy::prelude::*;

use super::output::ControllerEvents;
use super::timers::GraceWindow;

/// Monotonic clock reading in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(f64);

impl Timestamp {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> f64 {
        self.0
    }

    /// The instant `window` seconds after this one.
    pub fn after(self, window: f32) -> Self {
        Self(self.0 + f64::from(window))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn direction(self) -> i8 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }

    pub fn sign(self) -> f32 {
        f32::from(self.direction())
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Facing for a signed direction; zero has no facing.
    pub fn from_sign(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Facing::Right)
        } else if value < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Everything the controller remembers between ticks.
///
/// Only the controller's own tick (and `apply_knockback`) mutates this.
#[derive(Debug, Clone, Default)]
pub struct CharacterState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    /// Last contact refresh.
    pub grounded: bool,
    pub wall_adjacent: bool,
    /// Not grounded as of the previous refresh.
    pub airborne: bool,
    /// Granted on landing or wall jump, spent by a double jump.
    pub can_double_jump: bool,
    pub is_wall_jumping: bool,
    pub is_knocked: bool,
    pub wall_jump_lock: GraceWindow,
    pub knockback_lock: GraceWindow,
    pub coyote: GraceWindow,
    pub jump_buffer: GraceWindow,
    /// Events raised between ticks, reported by the next tick.
    pub(crate) pending_events: ControllerEvents,
    /// Knockback push started between ticks; survives the next body sync.
    pub(crate) pending_impulse: Option<Vec2>,
}

impl CharacterState {
    pub fn spawned_at(position: Vec2, facing: Facing) -> Self {
        Self {
            position,
            facing,
            ..default()
        }
    }

    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    pub fn flip(&mut self) {
        self.facing = self.facing.flipped();
    }
}
