//! Movement domain: components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::motor::CharacterMotor;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, ramps, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Per-entity movement kernel state
#[derive(Component)]
pub struct Motor(pub CharacterMotor);
