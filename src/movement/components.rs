//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::Contacts;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and walls; everything the contact probes can hit
    Ground,
    /// Player character
    Player,
    /// Damage triggers - sensors, never block movement
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for level geometry colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Latest contact refresh, consumed by the next controller tick.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactReadings(pub Contacts);

/// Parameters an animator reads; the controller never touches animation directly.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub is_grounded: bool,
    pub is_wall_detected: bool,
    pub is_knocked: bool,
}
