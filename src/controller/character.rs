//! Controller domain: the per-character tick entry point.

use bevy::prelude::*;
use serde::Serialize;

use super::abilities;
use super::airborne::{self, AirborneEdge};
use super::config::ControllerTuning;
use super::error::ConfigurationError;
use super::knockback;
use super::motion;
use super::output::{CharacterOutput, ControllerEvent};
use super::sensor::{self, Contacts, GroundProbe, ProbeRay};
use super::state::{CharacterState, Facing, Timestamp};

/// Input sampled for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerInput {
    /// Raw axes in [-1, 1]; negative `y` means down.
    pub axis: Vec2,
    /// Jump went down this tick (edge, not level).
    pub jump_pressed: bool,
}

/// Read-only view for debug tooling.
#[derive(Debug, Clone, Serialize)]
pub struct DebugSnapshot {
    pub now: f64,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub facing: i8,
    pub grounded: bool,
    pub wall_adjacent: bool,
    pub airborne: bool,
    pub can_double_jump: bool,
    pub is_wall_jumping: bool,
    pub is_knocked: bool,
    pub coyote_deadline: Option<f64>,
    pub buffer_deadline: Option<f64>,
    pub wall_jump_deadline: Option<f64>,
    pub knockback_deadline: Option<f64>,
}

/// Platformer movement state machine for one character.
#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    tuning: ControllerTuning,
    state: CharacterState,
    clock: Option<Timestamp>,
}

impl CharacterController {
    pub fn new(tuning: ControllerTuning) -> Result<Self, ConfigurationError> {
        Self::spawn(tuning, Vec2::ZERO, Facing::Right)
    }

    pub fn spawn(
        tuning: ControllerTuning,
        position: Vec2,
        facing: Facing,
    ) -> Result<Self, ConfigurationError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: CharacterState::spawned_at(position, facing),
            clock: None,
        })
    }

    pub fn tuning(&self) -> &ControllerTuning {
        &self.tuning
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn wall_adjacent(&self) -> bool {
        self.state.wall_adjacent
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn is_knocked(&self) -> bool {
        self.state.is_knocked
    }

    /// Time of the most recent tick, if any.
    pub fn clock(&self) -> Option<Timestamp> {
        self.clock
    }

    /// Feed back the body state after physics integration.
    pub fn sync_body(&mut self, position: Vec2, velocity: Vec2) {
        self.state.position = position;
        self.state.velocity = velocity;
    }

    /// Run one simulation step.
    ///
    /// `contacts` is the refresh taken after the previous step's motion, so contact
    /// state always lags one tick behind.
    pub fn tick(
        &mut self,
        now: Timestamp,
        input: &ControllerInput,
        contacts: Contacts,
    ) -> CharacterOutput {
        let now = self.advance_clock(now);
        let mut events = self.state.pending_events.take();

        // A knockback applied since the last tick outranks the synced body velocity
        if let Some(impulse) = self.state.pending_impulse.take() {
            self.state.velocity = impulse;
        }

        knockback::release_expired(&mut self.state, now);

        self.state.grounded = contacts.grounded;
        self.state.wall_adjacent = contacts.wall_adjacent;

        match airborne::track(&mut self.state, &self.tuning, now) {
            Some(AirborneEdge::Landed) => {
                events.insert(ControllerEvent::Landed);
                if !self.state.is_knocked {
                    if let Some(event) = abilities::try_buffered(&mut self.state, &self.tuning, now)
                    {
                        events.insert(event);
                    }
                }
            }
            Some(AirborneEdge::LeftGround) => events.insert(ControllerEvent::LeftGround),
            None => {}
        }

        if !self.state.is_knocked {
            if input.jump_pressed {
                if let Some(event) = abilities::request(&mut self.state, &self.tuning, now) {
                    events.insert(event);
                }
            }

            motion::apply_wall_slide(&mut self.state, &self.tuning, input.axis);
            motion::apply_horizontal(&mut self.state, &self.tuning, input.axis);
            motion::update_facing(&mut self.state, &self.tuning, input.axis);
        }

        CharacterOutput {
            velocity: self.state.velocity,
            facing: self.state.facing,
            events,
        }
    }

    /// Knock the character back; ignored while a knockback is already running.
    ///
    /// The push is reapplied by the next `tick` even if `sync_body` runs in between,
    /// and the `KnockedBack` event is reported there.
    pub fn apply_knockback(&mut self, now: Timestamp, from: Option<Facing>) -> bool {
        let now = self.advance_clock(now);
        knockback::apply(&mut self.state, &self.tuning, now, from)
    }

    /// Refresh contacts from the current position and facing.
    pub fn sense_contacts<P>(&self, probe: &P) -> Contacts
    where
        P: GroundProbe + ?Sized,
    {
        sensor::sense(probe, self.state.position, self.state.facing, &self.tuning)
    }

    pub fn probe_rays(&self) -> [ProbeRay; 2] {
        sensor::probe_rays(self.state.position, self.state.facing, &self.tuning)
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let state = &self.state;
        let secs = |t: Option<Timestamp>| t.map(Timestamp::as_secs);

        DebugSnapshot {
            now: self.clock.map_or(0.0, Timestamp::as_secs),
            position: state.position.to_array(),
            velocity: state.velocity.to_array(),
            facing: state.facing.direction(),
            grounded: state.grounded,
            wall_adjacent: state.wall_adjacent,
            airborne: state.airborne,
            can_double_jump: state.can_double_jump,
            is_wall_jumping: state.is_wall_jumping,
            is_knocked: state.is_knocked,
            coyote_deadline: secs(state.coyote.deadline()),
            buffer_deadline: secs(state.jump_buffer.deadline()),
            wall_jump_deadline: secs(state.wall_jump_lock.deadline()),
            knockback_deadline: secs(state.knockback_lock.deadline()),
        }
    }

    /// Never let deadline math run backwards; a stale `now` is pinned to the last tick.
    fn advance_clock(&mut self, now: Timestamp) -> Timestamp {
        match self.clock {
            Some(last) if now < last => {
                warn!(
                    "Controller clock went backwards ({} < {}), clamping",
                    now.as_secs(),
                    last.as_secs()
                );
                last
            }
            _ => {
                self.clock = Some(now);
                now
            }
        }
    }
}
