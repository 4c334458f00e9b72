//! Controller domain: per-character tuning and its validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// Two-component force, kept separate from `Vec2` so tuning files stay plain RON tuples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Impulse {
    pub x: f32,
    pub y: f32,
}

impl Impulse {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Descent multipliers applied while sliding down a wall.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WallSlideTuning {
    /// Applied while down is held (1.0 = fall freely).
    pub held_multiplier: f32,
    /// Applied otherwise (0.0 = cling, 0.5 = slow slide).
    pub idle_multiplier: f32,
}

impl Default for WallSlideTuning {
    fn default() -> Self {
        Self {
            held_multiplier: 1.0,
            idle_multiplier: 0.0,
        }
    }
}

/// What drives the facing flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum FlipPolicy {
    /// Flip as soon as horizontal input points the other way.
    #[default]
    Input,
    /// Flip when the resulting horizontal velocity points the other way.
    Velocity,
}

/// Feature gates; switching these off reproduces the simpler controller iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AbilityFlags {
    pub double_jump: bool,
    /// Wall detection side effects: wall slide, wall jump, horizontal lockout.
    pub wall_interactions: bool,
    pub coyote_jump: bool,
    pub jump_buffer: bool,
    pub knockback: bool,
}

impl Default for AbilityFlags {
    fn default() -> Self {
        Self {
            double_jump: true,
            wall_interactions: true,
            coyote_jump: true,
            jump_buffer: true,
            knockback: true,
        }
    }
}

impl AbilityFlags {
    /// Ground movement and a single jump, nothing else.
    pub fn ground_only() -> Self {
        Self {
            double_jump: false,
            wall_interactions: false,
            coyote_jump: false,
            jump_buffer: false,
            knockback: false,
        }
    }
}

/// Immutable per-character tuning. Times are in seconds, distances in world units.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub wall_jump_force: Impulse,
    pub wall_jump_duration: f32,
    pub knockback_duration: f32,
    pub knockback_force: Impulse,
    pub coyote_jump_window: f32,
    pub buffer_jump_window: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub wall_slide: WallSlideTuning,
    pub flip_policy: FlipPolicy,
    pub abilities: AbilityFlags,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_force: 680.0,
            double_jump_force: 600.0,
            wall_jump_force: Impulse::new(400.0, 620.0),
            wall_jump_duration: 0.6,
            knockback_duration: 0.65,
            knockback_force: Impulse::new(360.0, 420.0),
            coyote_jump_window: 0.12,
            buffer_jump_window: 0.12,
            ground_check_distance: 28.0,
            wall_check_distance: 16.0,
            wall_slide: WallSlideTuning::default(),
            flip_policy: FlipPolicy::default(),
            abilities: AbilityFlags::default(),
        }
    }
}

macro_rules! check_finite {
    ($value:expr, $field:expr) => {
        if !$value.is_finite() {
            return Err(ConfigurationError::NotFinite { field: $field });
        }
    };
}

macro_rules! check_non_negative {
    ($value:expr, $field:expr) => {
        check_finite!($value, $field);
        if $value < 0.0 {
            return Err(ConfigurationError::Negative {
                field: $field,
                value: $value,
            });
        }
    };
}

macro_rules! check_unit_range {
    ($value:expr, $field:expr) => {
        check_finite!($value, $field);
        if !(0.0..=1.0).contains(&$value) {
            return Err(ConfigurationError::OutOfRange {
                field: $field,
                value: $value,
                min: 0.0,
                max: 1.0,
            });
        }
    };
}

impl ControllerTuning {
    /// Reject values that would break the deadline math or the probes.
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_non_negative!(self.move_speed, "move_speed");
        check_finite!(self.jump_force, "jump_force");
        check_finite!(self.double_jump_force, "double_jump_force");
        check_finite!(self.wall_jump_force.x, "wall_jump_force.x");
        check_finite!(self.wall_jump_force.y, "wall_jump_force.y");
        check_non_negative!(self.wall_jump_duration, "wall_jump_duration");
        check_non_negative!(self.knockback_duration, "knockback_duration");
        check_finite!(self.knockback_force.x, "knockback_force.x");
        check_finite!(self.knockback_force.y, "knockback_force.y");
        check_non_negative!(self.coyote_jump_window, "coyote_jump_window");
        check_non_negative!(self.buffer_jump_window, "buffer_jump_window");
        check_non_negative!(self.ground_check_distance, "ground_check_distance");
        check_non_negative!(self.wall_check_distance, "wall_check_distance");
        check_unit_range!(self.wall_slide.held_multiplier, "wall_slide.held_multiplier");
        check_unit_range!(self.wall_slide.idle_multiplier, "wall_slide.idle_multiplier");
        Ok(())
    }

    /// Parse tuning from RON text. Omitted fields keep their defaults.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
            .from_str(text)
    }
}
