//! Movement domain: input resources.

use bevy::prelude::*;

use crate::controller::ControllerInput;

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}

impl MovementInput {
    pub fn sample(&self) -> ControllerInput {
        ControllerInput {
            axis: self.axis,
            jump_pressed: self.jump_just_pressed,
        }
    }
}
