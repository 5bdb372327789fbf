// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the spin engine.

use thiserror::Error;

/// Errors returned when a spin cannot start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinError {
    /// Auto spins need a finite, positive duration to ease over.
    #[error("spin duration must be a positive number of seconds, got {seconds}")]
    InvalidDuration { seconds: f64 },
}
