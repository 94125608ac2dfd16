//! Movement domain: tuning, probe configuration, and input resources.

use std::sync::Arc;

use avian2d::prelude::PhysicsLayer;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;
use crate::movement::sensor::GroundSensor;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Rate at which the unit-range horizontal speed approaches the input
    /// direction, in units per second.
    pub acceleration: f32,
    /// Rate used to come to rest when input is released or the surface is
    /// too steep to walk on.
    pub deceleration: f32,
    /// Sharper rate used while input opposes the current travel direction.
    pub turn_deceleration: f32,
    /// World-space horizontal speed at full input, units per second.
    pub max_speed: f32,
    pub gravity: f32,
    /// Vertical speed applied when a jump is consumed.
    pub jump_impulse: f32,
    /// Window after a jump request during which stepping off a ledge is not
    /// treated as a drop.
    pub jump_timeout: f32,
    /// Steepest walkable surface angle, in degrees from horizontal.
    pub slope_limit: f32,
    pub slope_acceleration: f32,
    pub slope_min_speed: f32,
    pub slope_max_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            acceleration: 8.0,
            deceleration: 10.0,
            turn_deceleration: 16.0,
            max_speed: 320.0,
            gravity: 1800.0,
            jump_impulse: 680.0,
            jump_timeout: 0.2,
            slope_limit: 45.0,
            slope_acceleration: 600.0,
            slope_min_speed: 60.0,
            slope_max_speed: 480.0,
        }
    }
}

/// Geometry and collision mask for the two ground probes.
///
/// Offsets are relative to the queried position; distances are cast lengths
/// along the probe direction.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundProbeConfig {
    pub mask: u32,
    pub ground_radius: f32,
    pub ground_offset: [f32; 2],
    pub ground_distance: f32,
    pub abyss_radius: f32,
    pub abyss_offset: [f32; 2],
    pub abyss_distance: f32,
}

impl Default for GroundProbeConfig {
    fn default() -> Self {
        Self {
            mask: GameLayer::Ground.to_bits(),
            ground_radius: 10.0,
            ground_offset: [0.0, 0.0],
            ground_distance: 20.0,
            abyss_radius: 4.0,
            abyss_offset: [0.0, 0.0],
            abyss_distance: 34.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub x_axis: f32,
    pub jump_just_pressed: bool,
}

/// Validated movement configuration, shared read-only across characters.
#[derive(Resource, Clone)]
pub struct MovementConfig {
    pub tuning: Arc<MovementTuning>,
    pub sensor: Arc<GroundSensor>,
}
