//! Movement domain: ground and wall probing through avian2d ray casts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CharacterController, GroundProbe};
use crate::movement::{ContactReadings, GameLayer};

/// Ray casts against the Ground layer only (not the player, hazards, etc.)
pub struct SpatialProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub fn ground(query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground),
        }
    }
}

impl GroundProbe for SpatialProbe<'_, '_, '_> {
    fn cast(&self, origin: Vec2, direction: Dir2, distance: f32) -> bool {
        self.query
            .cast_ray(origin, direction, distance, true, &self.filter)
            .is_some()
    }
}

/// Runs after the controller tick, so the next tick sees post-move contacts.
pub(crate) fn refresh_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(
        &Transform,
        &mut CharacterController,
        &mut ContactReadings,
    )>,
) {
    let probe = SpatialProbe::ground(&spatial_query);

    for (transform, mut controller, mut readings) in &mut query {
        let velocity = controller.velocity();
        controller.sync_body(transform.translation.truncate(), velocity);

        let contacts = controller.sense_contacts(&probe);
        if contacts != readings.0 {
            debug!(
                "Contacts changed: grounded={}, wall_adjacent={}",
                contacts.grounded, contacts.wall_adjacent
            );
        }
        readings.0 = contacts;
    }
}
