//! Movement domain: controller events forwarded into the ECS.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::controller::ControllerEvent;

/// One ability or contact event raised by a character's tick
#[derive(Debug, Clone, Copy)]
pub struct ControllerEventMessage {
    pub entity: Entity,
    pub event: ControllerEvent,
}

impl Message for ControllerEventMessage {}
