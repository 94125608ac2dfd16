//! Movement domain: ground sensing and the character motor.
//!
//! The kernel ([`GroundSensor`] + [`CharacterMotor`]) is plain math over
//! `Vec2` with explicit position and `dt` parameters; the systems in this
//! module adapt it to the physics world and the input resources.

mod bootstrap;
mod components;
mod motor;
mod resources;
mod sensor;
pub(crate) mod systems;

pub use components::{GameLayer, Ground, Motor, Player};
pub use motor::{CharacterMotor, Mover};
pub use resources::{GroundProbeConfig, MovementConfig, MovementInput, MovementTuning};
pub use sensor::{CastHit, GroundCheck, GroundSensor, ShapeCast};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, (bootstrap::spawn_player, bootstrap::spawn_sandbox))
            .add_systems(
                Update,
                (systems::read_input, systems::drive_motor).chain(),
            );
    }
}
