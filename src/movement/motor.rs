//! Movement domain: the per-tick character motor.
//!
//! The motor owns a character's velocity state and advances it one tick at a
//! time from explicit inputs. It never reads clocks or scene state on its
//! own; position and `dt` are parameters, world geometry is reached through
//! the [`ShapeCast`] seam, and the resulting displacement leaves through the
//! [`Mover`] seam.

use std::sync::Arc;

use bevy::math::Vec2;

use crate::config::validation::{ValidationError, validate_tuning};
use crate::movement::MovementTuning;
use crate::movement::sensor::{GroundCheck, GroundSensor, ShapeCast};

/// Inputs below this magnitude count as no input at all.
const INPUT_DEADZONE: f32 = 0.1;

/// Collision-resolving mover supplied by the host. Receives the requested
/// displacement for one tick and owns the resulting world position.
pub trait Mover {
    fn move_by(&mut self, displacement: Vec2);
}

/// Bounded linear approach: steps `current` toward `target` by at most
/// `max_delta`, landing exactly on the target instead of overshooting it.
pub(crate) fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(delta)
    }
}

/// Per-character movement state machine.
///
/// `horizontal` is a signed unit-range speed, scaled by `max_speed` only
/// when composing the output velocity. `slope` is an unsigned slide speed
/// applied along the downhill direction of steep surfaces.
pub struct CharacterMotor {
    tuning: Arc<MovementTuning>,
    sensor: Arc<GroundSensor>,

    horizontal: f32,
    vertical: f32,
    slope: f32,
    velocity: Vec2,

    /// Consumed exactly once by the next tick's vertical step.
    pending_jump: Option<f32>,
    jump_timeout: f32,
    /// Exists solely to detect the grounded -> airborne transition.
    was_grounded: bool,
}

impl CharacterMotor {
    pub fn new(
        tuning: Arc<MovementTuning>,
        sensor: Arc<GroundSensor>,
    ) -> Result<Self, ValidationError> {
        if let Some(err) = validate_tuning(&tuning).into_iter().next() {
            return Err(err);
        }
        Ok(Self {
            tuning,
            sensor,
            horizontal: 0.0,
            vertical: 0.0,
            slope: 0.0,
            velocity: Vec2::ZERO,
            pending_jump: None,
            jump_timeout: 0.0,
            was_grounded: false,
        })
    }

    /// Velocity composed by the most recent tick.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Records an upward impulse for the next tick and re-arms the window
    /// that keeps a fresh jump from being read back as a ledge drop.
    pub fn jump(&mut self, impulse: f32) {
        self.pending_jump = Some(impulse);
        self.jump_timeout = self.tuning.jump_timeout;
    }

    /// Advances the motor one tick and hands the resulting displacement to
    /// the mover. `x_input` is the raw horizontal axis in [-1, 1].
    pub fn update(
        &mut self,
        position: Vec2,
        x_input: f32,
        dt: f32,
        caster: &dyn ShapeCast,
        mover: &mut dyn Mover,
    ) {
        self.jump_timeout -= dt;

        // One query per tick; every step below reads this snapshot.
        let ground = self
            .sensor
            .check_ground(caster, position, Vec2::NEG_Y, self.tuning.slope_limit);

        let horizontal = self.step_horizontal(x_input, dt, &ground);
        self.step_vertical(dt, &ground);
        let downhill = self.step_slope(dt, &ground);

        self.velocity = horizontal + Vec2::new(0.0, self.vertical) + downhill * self.slope;
        mover.move_by(self.velocity * dt);
    }

    /// Eases the unit-range horizontal speed, then converts it to a world
    /// vector, following the surface when the ground is walkable.
    fn step_horizontal(&mut self, x_input: f32, dt: f32, ground: &GroundCheck) -> Vec2 {
        let input_dir = if x_input.abs() < INPUT_DEADZONE {
            0.0
        } else {
            x_input.signum()
        };
        let turning = (x_input > INPUT_DEADZONE && self.horizontal < -INPUT_DEADZONE)
            || (x_input < -INPUT_DEADZONE && self.horizontal > INPUT_DEADZONE);

        if turning {
            self.horizontal =
                move_towards(self.horizontal, 0.0, self.tuning.turn_deceleration * dt);
        } else if input_dir == 0.0 || ground.over_slope {
            self.horizontal = move_towards(self.horizontal, 0.0, self.tuning.deceleration * dt);
        } else {
            self.horizontal =
                move_towards(self.horizontal, input_dir, self.tuning.acceleration * dt);
        }

        let flat = Vec2::new(self.horizontal, 0.0);
        if ground.on_ground && !ground.over_slope && !ground.over_abyss {
            // Walking follows the surface, so a walkable ramp neither lifts
            // the character off the ground nor pushes it into the ground.
            let along = (flat - ground.normal * flat.dot(ground.normal)).normalize_or_zero();
            along * self.horizontal.abs() * self.tuning.max_speed
        } else {
            flat * self.tuning.max_speed
        }
    }

    fn step_vertical(&mut self, dt: f32, ground: &GroundCheck) {
        if let Some(impulse) = self.pending_jump.take() {
            self.vertical = impulse;
        } else if self.was_grounded && !ground.on_ground && self.jump_timeout < 0.0 {
            // Stepping off a ledge starts the fall at the slide speed
            // carried into this tick instead of from zero.
            self.vertical = -self.slope;
        } else if !ground.on_ground {
            self.vertical -= self.tuning.gravity * dt;
        }

        self.was_grounded = ground.on_ground;
    }

    /// Updates the slide speed and returns the downhill direction used to
    /// apply it. Sliding only builds up while falling or resting; a rising
    /// character keeps its slide speed untouched.
    fn step_slope(&mut self, dt: f32, ground: &GroundCheck) -> Vec2 {
        let downhill = if ground.on_ground {
            (ground.normal * ground.normal.y - Vec2::Y).normalize_or_zero()
        } else {
            Vec2::ZERO
        };

        if self.vertical <= 0.0 {
            if (ground.on_ground && ground.over_slope) || ground.over_abyss {
                self.slope = (self.slope + self.tuning.slope_acceleration * dt)
                    .clamp(self.tuning.slope_min_speed, self.tuning.slope_max_speed);
            } else {
                self.slope = 0.0;
            }
        }

        downhill
    }
}
