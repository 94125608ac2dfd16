//! Config domain: startup loading and validation of movement settings.
//!
//! Settings are read once before the first tick and are immutable for the
//! rest of the run. A missing file falls back to the compiled defaults; a
//! present but malformed or out-of-range file is fatal.

mod loader;
#[cfg(test)]
mod tests;
pub(crate) mod validation;

pub use loader::{ConfigLoadError, MovementFile, load_movement_file};
pub use validation::{ValidationError, validate_file, validate_probes, validate_tuning};

use std::path::Path;
use std::sync::Arc;

use bevy::prelude::*;

use crate::movement::{GroundSensor, MovementConfig};

const MOVEMENT_FILE: &str = "assets/data/movement.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_config);
    }
}

fn load_movement_config(mut commands: Commands) {
    let path = Path::new(MOVEMENT_FILE);
    let file = if path.exists() {
        match loader::load_movement_file(path) {
            Ok(file) => file,
            Err(err) => panic!("{err}"),
        }
    } else {
        warn!("{MOVEMENT_FILE} not found, using built-in movement defaults");
        MovementFile::default()
    };

    let errors = validation::validate_file(&file);
    if !errors.is_empty() {
        for err in &errors {
            error!("{err}");
        }
        panic!(
            "movement configuration is invalid ({} error(s))",
            errors.len()
        );
    }

    let sensor = match GroundSensor::new(file.probes) {
        Ok(sensor) => sensor,
        Err(err) => panic!("{err}"),
    };

    info!(
        "movement config loaded: max_speed={}, gravity={}, slope_limit={}",
        file.tuning.max_speed, file.tuning.gravity, file.tuning.slope_limit
    );

    commands.insert_resource(MovementConfig {
        tuning: Arc::new(file.tuning),
        sensor: Arc::new(sensor),
    });
}
