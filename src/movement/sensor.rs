//! Movement domain: ground and cliff probing.

use bevy::math::Vec2;

use crate::config::validation::{ValidationError, validate_probes};
use crate::movement::GroundProbeConfig;

/// A single shape-cast hit against world geometry.
#[derive(Debug, Clone, Copy)]
pub struct CastHit {
    /// Outward surface normal at the contact point.
    pub normal: Vec2,
    /// Contact point on the hit surface, in world space.
    pub point: Vec2,
}

/// Read-only shape-cast primitive supplied by the host. Must not mutate the
/// world; two casts with the same arguments in the same tick see the same
/// geometry.
pub trait ShapeCast {
    fn cast(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<CastHit>;
}

/// Result of one ground query.
///
/// Owned by the caller for the duration of the tick it was produced in.
/// `normal` and `point` are zeroed and carry no meaning unless `on_ground`
/// is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundCheck {
    pub on_ground: bool,
    /// The narrow probe found nothing underfoot: the character is at a
    /// ledge edge (or fully airborne).
    pub over_abyss: bool,
    /// Surface angle exceeds the walkable slope limit.
    pub over_slope: bool,
    pub normal: Vec2,
    pub point: Vec2,
}

/// Probes the ground with two casts: a wide one that decides whether there
/// is standing geometry at all, and a narrow one that decides whether the
/// spot directly underfoot is open (a cliff edge).
#[derive(Debug, Clone)]
pub struct GroundSensor {
    config: GroundProbeConfig,
}

impl GroundSensor {
    pub fn new(config: GroundProbeConfig) -> Result<Self, ValidationError> {
        if let Some(err) = validate_probes(&config).into_iter().next() {
            return Err(err);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &GroundProbeConfig {
        &self.config
    }

    /// Casts both probes from `position` along `direction` (conventionally
    /// straight down) and folds the hits into one result. Pure: no world
    /// mutation, no retained state.
    ///
    /// The ground probe is cast first, the abyss probe second.
    pub fn check_ground(
        &self,
        caster: &dyn ShapeCast,
        position: Vec2,
        direction: Vec2,
        slope_limit: f32,
    ) -> GroundCheck {
        let ground_hit = caster.cast(
            position + Vec2::from(self.config.ground_offset),
            self.config.ground_radius,
            direction,
            self.config.ground_distance,
            self.config.mask,
        );
        let abyss_hit = caster.cast(
            position + Vec2::from(self.config.abyss_offset),
            self.config.abyss_radius,
            direction,
            self.config.abyss_distance,
            self.config.mask,
        );

        let mut check = GroundCheck {
            on_ground: ground_hit.is_some(),
            over_abyss: abyss_hit.is_none(),
            ..Default::default()
        };

        if let Some(hit) = ground_hit {
            check.normal = hit.normal;
            check.point = hit.point;
            check.over_slope = Vec2::Y.angle_to(hit.normal).abs().to_degrees() > slope_limit;
        }

        check
    }
}
