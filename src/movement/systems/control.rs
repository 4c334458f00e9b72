//! Movement domain: driving character controllers once per frame.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CharacterController, Facing, Timestamp};
use crate::movement::{ContactReadings, ControllerEventMessage, MovementInput, Player};

pub(crate) fn drive_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut messages: MessageWriter<ControllerEventMessage>,
    mut query: Query<
        (
            Entity,
            &mut CharacterController,
            &ContactReadings,
            &Transform,
            &mut LinearVelocity,
            Option<&mut Sprite>,
        ),
        With<Player>,
    >,
) {
    let now = Timestamp::from_secs(time.elapsed_secs_f64());
    let sample = input.sample();

    for (entity, mut controller, contacts, transform, mut velocity, sprite) in &mut query {
        controller.sync_body(transform.translation.truncate(), velocity.0);

        let output = controller.tick(now, &sample, contacts.0);
        velocity.0 = output.velocity;

        if let Some(mut sprite) = sprite {
            sprite.flip_x = output.facing == Facing::Left;
        }

        for event in output.events.iter() {
            messages.write(ControllerEventMessage { entity, event });
        }
    }
}

pub(crate) fn report_controller_events(mut messages: MessageReader<ControllerEventMessage>) {
    for message in messages.read() {
        debug!("{:?}: {:?}", message.entity, message.event);
    }
}
