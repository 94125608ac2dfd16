//! Movement domain: systems driving the motor through the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::motor::Mover;
use crate::movement::sensor::{CastHit, ShapeCast};
use crate::movement::{Motor, MovementConfig, MovementInput, Player};

/// [`ShapeCast`] adapter over avian's spatial query pipeline.
pub(crate) struct SpatialCaster<'w, 's, 'a> {
    pub query: &'a SpatialQuery<'w, 's>,
}

impl ShapeCast for SpatialCaster<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<CastHit> {
        let direction = Dir2::new(direction).ok()?;
        self.query
            .cast_shape(
                &Collider::circle(radius),
                origin,
                0.0,
                direction,
                &ShapeCastConfig::from_max_distance(max_distance),
                &SpatialQueryFilter::from_mask(LayerMask(mask)),
            )
            .map(|hit| CastHit {
                normal: hit.normal1,
                point: hit.point1,
            })
    }
}

/// [`Mover`] adapter that hands the requested displacement back to the
/// physics body as a velocity, leaving integration and collision resolution
/// to the solver.
struct VelocityMover<'a> {
    velocity: &'a mut LinearVelocity,
    dt: f32,
}

impl Mover for VelocityMover<'_> {
    fn move_by(&mut self, displacement: Vec2) {
        self.velocity.0 = displacement / self.dt;
    }
}

pub(crate) fn drive_motor(
    time: Res<Time>,
    input: Res<MovementInput>,
    config: Res<MovementConfig>,
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut Motor, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let caster = SpatialCaster {
        query: &spatial_query,
    };

    for (transform, mut motor, mut velocity) in &mut query {
        if input.jump_just_pressed {
            motor.0.jump(config.tuning.jump_impulse);
            debug!("jump requested: impulse={}", config.tuning.jump_impulse);
        }

        let mut mover = VelocityMover {
            velocity: &mut *velocity,
            dt,
        };
        motor.0.update(
            transform.translation.truncate(),
            input.x_axis,
            dt,
            &caster,
            &mut mover,
        );
    }
}
