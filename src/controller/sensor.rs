//! Controller domain: contact sensing through an external ray-cast primitive.

use bevy::prelude::*;

use super::config::ControllerTuning;
use super::state::Facing;

/// Result of one contact refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub grounded: bool,
    pub wall_adjacent: bool,
}

impl Contacts {
    pub const AIRBORNE: Self = Self {
        grounded: false,
        wall_adjacent: false,
    };

    pub const GROUNDED: Self = Self {
        grounded: true,
        wall_adjacent: false,
    };

    pub const ON_WALL: Self = Self {
        grounded: false,
        wall_adjacent: true,
    };
}

/// "Cast a ray, did it hit ground?" supplied by the physics collaborator.
pub trait GroundProbe {
    fn cast(&self, origin: Vec2, direction: Dir2, distance: f32) -> bool;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec2, Dir2, f32) -> bool,
{
    fn cast(&self, origin: Vec2, direction: Dir2, distance: f32) -> bool {
        self(origin, direction, distance)
    }
}

/// One probe segment, also used for debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub origin: Vec2,
    pub direction: Dir2,
    pub distance: f32,
}

impl ProbeRay {
    pub fn end(&self) -> Vec2 {
        self.origin + *self.direction * self.distance
    }
}

/// Ground probe straight down, wall probe along the facing direction.
pub fn probe_rays(position: Vec2, facing: Facing, tuning: &ControllerTuning) -> [ProbeRay; 2] {
    let wall_direction = match facing {
        Facing::Right => Dir2::X,
        Facing::Left => Dir2::NEG_X,
    };

    [
        ProbeRay {
            origin: position,
            direction: Dir2::NEG_Y,
            distance: tuning.ground_check_distance,
        },
        ProbeRay {
            origin: position,
            direction: wall_direction,
            distance: tuning.wall_check_distance,
        },
    ]
}

/// Pure function of position and facing; keeps no state.
pub fn sense<P>(probe: &P, position: Vec2, facing: Facing, tuning: &ControllerTuning) -> Contacts
where
    P: GroundProbe + ?Sized,
{
    let [ground, wall] = probe_rays(position, facing, tuning);

    Contacts {
        grounded: probe.cast(ground.origin, ground.direction, ground.distance),
        wall_adjacent: probe.cast(wall.origin, wall.direction, wall.distance),
    }
}
