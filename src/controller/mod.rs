//! Controller domain: engine-agnostic platformer movement state machine.
//!
//! Each tick runs, in order: expire timed overrides, detect airborne edges,
//! resolve jumps, damp wall slides, apply horizontal input, update facing.
//! Contacts and body state come from outside; the only output written back to
//! physics is the desired velocity.

mod abilities;
mod airborne;
mod character;
mod config;
mod error;
mod knockback;
mod motion;
mod output;
mod sensor;
mod state;
mod timers;


pub use abilities::JumpKind;
pub use airborne::AirborneEdge;
pub use character::{CharacterController, ControllerInput, DebugSnapshot};
pub use config::{AbilityFlags, ControllerTuning, FlipPolicy, Impulse, WallSlideTuning};
pub use error::ConfigurationError;
pub use output::{CharacterOutput, ControllerEvent, ControllerEvents};
pub use sensor::{Contacts, GroundProbe, ProbeRay};
pub use state::{CharacterState, Facing, Timestamp};
pub use timers::GraceWindow;
