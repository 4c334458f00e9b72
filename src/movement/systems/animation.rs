//! Movement domain: animation parameter binding.

use bevy::prelude::*;

use crate::controller::CharacterController;
use crate::movement::AnimationParams;

pub(crate) fn bind_animation_params(
    mut query: Query<(&CharacterController, &mut AnimationParams)>,
) {
    for (controller, mut params) in &mut query {
        let velocity = controller.velocity();

        *params = AnimationParams {
            x_velocity: velocity.x,
            y_velocity: velocity.y,
            is_grounded: controller.grounded(),
            is_wall_detected: controller.wall_adjacent(),
            is_knocked: controller.is_knocked(),
        };
    }
}
