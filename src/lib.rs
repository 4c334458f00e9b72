//! Platformer character controller: a tick-driven movement state machine plus
//! bevy/avian2d plugins that feed it.

pub mod content;
pub mod controller;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod hazards;
pub mod movement;
