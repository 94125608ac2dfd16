//! Movement domain: system modules for per-tick updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{SpatialCaster, drive_motor};
