//! Validation for movement configuration values.

use crate::movement::{GroundProbeConfig, MovementTuning};

use super::loader::MovementFile;

/// A validation error with context about which value failed.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for range checks
macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $cond:expr, $msg:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: $msg.to_string(),
            });
        }
    };
}

/// Validate the tuning values. Returns a list of errors, empty if valid.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let s = "tuning";

    check!(
        errors,
        s,
        "acceleration",
        tuning.acceleration >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "deceleration",
        tuning.deceleration >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "turn_deceleration",
        tuning.turn_deceleration >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "max_speed",
        tuning.max_speed > 0.0,
        "must be positive"
    );
    check!(errors, s, "gravity", tuning.gravity > 0.0, "must be positive");
    check!(
        errors,
        s,
        "jump_impulse",
        tuning.jump_impulse >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "jump_timeout",
        tuning.jump_timeout >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "slope_limit",
        (0.0..180.0).contains(&tuning.slope_limit),
        "must lie in [0, 180)"
    );
    check!(
        errors,
        s,
        "slope_acceleration",
        tuning.slope_acceleration >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "slope_min_speed",
        tuning.slope_min_speed >= 0.0,
        "must be non-negative"
    );
    check!(
        errors,
        s,
        "slope_max_speed",
        tuning.slope_max_speed >= tuning.slope_min_speed,
        "must be at least slope_min_speed"
    );

    errors
}

/// Validate the probe geometry. Returns a list of errors, empty if valid.
pub fn validate_probes(probes: &GroundProbeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let s = "probes";

    check!(
        errors,
        s,
        "ground_radius",
        probes.ground_radius > 0.0,
        "must be positive"
    );
    check!(
        errors,
        s,
        "ground_distance",
        probes.ground_distance > 0.0,
        "must be positive"
    );
    check!(
        errors,
        s,
        "abyss_radius",
        probes.abyss_radius > 0.0,
        "must be positive"
    );
    check!(
        errors,
        s,
        "abyss_distance",
        probes.abyss_distance > 0.0,
        "must be positive"
    );

    errors
}

/// Validate a whole configuration file.
pub fn validate_file(file: &MovementFile) -> Vec<ValidationError> {
    let mut errors = validate_tuning(&file.tuning);
    errors.extend(validate_probes(&file.probes));
    errors
}
