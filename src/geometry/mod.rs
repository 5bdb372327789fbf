// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometry of the wheel.
//!
//! This module contains:
//! - constants: full turn, pointer position, tolerances
//! - angle: normalisation and pointer lookup

pub mod angle;
pub mod constants;

// Re-export for convenience
pub use angle::{fold_turns, normalize, under_pointer};
pub use constants::*;
