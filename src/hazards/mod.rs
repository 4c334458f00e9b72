//! Hazards domain: damage triggers that knock characters back on contact.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CharacterController, Facing, Timestamp};
use crate::movement::MovementSystems;

/// Which way a trigger pushes the character it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushSide {
    /// Back against the character's facing, whatever side it was touched from.
    #[default]
    Facing,
    /// Away from the trigger's center.
    AwayFromTrigger,
}

impl PushSide {
    /// Side the hit comes from, as handed to `apply_knockback`.
    pub fn hit_side(self, trigger: Vec2, target: Vec2) -> Option<Facing> {
        match self {
            PushSide::Facing => None,
            PushSide::AwayFromTrigger => Facing::from_sign(trigger.x - target.x),
        }
    }
}

/// Sensor collider that knocks back any controller-driven character entering it.
/// Never inspects controller state; re-entry while knocked is the controller's call.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DamageTrigger {
    pub push: PushSide,
}

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, knock_back_on_contact.before(MovementSystems));
    }
}

pub(crate) fn knock_back_on_contact(
    time: Res<Time>,
    mut collision_events: MessageReader<CollisionStart>,
    triggers: Query<(&DamageTrigger, &Transform)>,
    mut targets: Query<(&mut CharacterController, &Transform)>,
) {
    let now = Timestamp::from_secs(time.elapsed_secs_f64());

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (trigger_entity, target_entity) in pairs {
            let Ok((trigger, trigger_transform)) = triggers.get(trigger_entity) else {
                continue;
            };

            let Ok((mut controller, target_transform)) = targets.get_mut(target_entity) else {
                continue;
            };

            let from = trigger.push.hit_side(
                trigger_transform.translation.truncate(),
                target_transform.translation.truncate(),
            );

            if controller.apply_knockback(now, from) {
                info!(
                    "{:?} hit by damage trigger {:?}, knocked back",
                    target_entity, trigger_entity
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_push_defers_to_controller() {
        let side = PushSide::Facing.hit_side(Vec2::new(10.0, 0.0), Vec2::ZERO);
        assert_eq!(side, None);
    }

    #[test]
    fn test_push_away_from_trigger() {
        let right = PushSide::AwayFromTrigger.hit_side(Vec2::new(10.0, 0.0), Vec2::ZERO);
        let left = PushSide::AwayFromTrigger.hit_side(Vec2::new(-10.0, 0.0), Vec2::ZERO);

        assert_eq!(right, Some(Facing::Right));
        assert_eq!(left, Some(Facing::Left));
    }

    #[test]
    fn test_trigger_directly_above_falls_back_to_facing() {
        let side = PushSide::AwayFromTrigger.hit_side(Vec2::new(0.0, 30.0), Vec2::ZERO);
        assert_eq!(side, None);
    }
}
