//! Controller domain: per-tick output and the event set.

use bevy::prelude::*;

use super::state::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerEvent {
    Jumped,
    DoubleJumped,
    WallJumped,
    KnockedBack,
    Landed,
    LeftGround,
}

impl ControllerEvent {
    pub const ALL: [ControllerEvent; 6] = [
        ControllerEvent::Jumped,
        ControllerEvent::DoubleJumped,
        ControllerEvent::WallJumped,
        ControllerEvent::KnockedBack,
        ControllerEvent::Landed,
        ControllerEvent::LeftGround,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Small set of events raised during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerEvents(u8);

impl ControllerEvents {
    pub fn insert(&mut self, event: ControllerEvent) {
        self.0 |= event.bit();
    }

    pub fn contains(&self, event: ControllerEvent) -> bool {
        self.0 & event.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ControllerEvent> + '_ {
        ControllerEvent::ALL
            .into_iter()
            .filter(|event| self.contains(*event))
    }

    /// Move all events out, leaving the set empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl FromIterator<ControllerEvent> for ControllerEvents {
    fn from_iter<I: IntoIterator<Item = ControllerEvent>>(iter: I) -> Self {
        let mut events = Self::default();
        for event in iter {
            events.insert(event);
        }
        events
    }
}

/// What a tick hands back to the physics and presentation collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterOutput {
    /// Desired velocity; the only value written to the rigid body.
    pub velocity: Vec2,
    pub facing: Facing,
    pub events: ControllerEvents,
}

impl CharacterOutput {
    pub fn facing_direction(&self) -> i8 {
        self.facing.direction()
    }
}
