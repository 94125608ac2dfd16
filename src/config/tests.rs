//! Config domain: unit tests for parsing and validation.

use super::loader::{MovementFile, parse_movement_file};
use super::validation::{validate_file, validate_probes, validate_tuning};
use crate::movement::{GroundProbeConfig, MovementTuning};

#[test]
fn test_default_config_is_valid() {
    assert!(validate_file(&MovementFile::default()).is_empty());
}

#[test]
fn test_rejects_out_of_range_tuning() {
    let tuning = MovementTuning {
        acceleration: -1.0,
        max_speed: 0.0,
        gravity: 0.0,
        slope_limit: 180.0,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"acceleration"));
    assert!(fields.contains(&"max_speed"));
    assert!(fields.contains(&"gravity"));
    assert!(fields.contains(&"slope_limit"));
}

#[test]
fn test_rejects_inverted_slope_speed_range() {
    let tuning = MovementTuning {
        slope_min_speed: 100.0,
        slope_max_speed: 50.0,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "slope_max_speed");
}

#[test]
fn test_rejects_degenerate_probes() {
    let probes = GroundProbeConfig {
        ground_radius: 0.0,
        abyss_distance: -2.0,
        ..Default::default()
    };
    let errors = validate_probes(&probes);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"ground_radius"));
    assert!(fields.contains(&"abyss_distance"));
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let file = parse_movement_file("movement.ron", "(tuning: (max_speed: 200.0))").unwrap();
    assert_eq!(file.tuning.max_speed, 200.0);
    assert_eq!(file.tuning.gravity, MovementTuning::default().gravity);
    assert_eq!(
        file.probes.ground_radius,
        GroundProbeConfig::default().ground_radius
    );
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_movement_file("movement.ron", "not ron at all (").unwrap_err();
    assert_eq!(err.file, "movement.ron");
    assert!(err.to_string().contains("movement.ron"));
}
