//! Loader for the RON movement configuration file.

use std::fs;
use std::path::Path;

use ron::Options;
use serde::{Deserialize, Serialize};

use crate::movement::{GroundProbeConfig, MovementTuning};

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk shape of `assets/data/movement.ron`. Every field falls back to
/// the compiled defaults, so a partial file only overrides what it names.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementFile {
    pub tuning: MovementTuning,
    pub probes: GroundProbeConfig,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn parse_movement_file(
    file_name: &str,
    contents: &str,
) -> Result<MovementFile, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_movement_file(path: &Path) -> Result<MovementFile, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_file(&file_name, &contents)
}
