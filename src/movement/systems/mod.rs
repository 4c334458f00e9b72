//! Movement domain: system modules for locomotion updates.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod control;
pub(crate) mod input;

pub use collisions::SpatialProbe;

pub(crate) use animation::bind_animation_params;
pub(crate) use collisions::refresh_contacts;
pub(crate) use control::{drive_controllers, report_controller_events};
pub(crate) use input::read_input;
