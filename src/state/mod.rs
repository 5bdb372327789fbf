// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable spin state.
//!
//! This module contains the state a [`SpinEngine`](crate::engine::SpinEngine)
//! owns for its whole lifetime:
//! - SpinMode: which phase of the spin cycle the engine is in
//! - SpinState: rotation, velocity and timing of the current cycle
//! - Statistics: per-engine counters

pub mod statistics;

pub use statistics::{Counters, Statistics};

use std::time::Duration;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// Phase of the spin cycle.
///
/// `Idle` is both the initial state and the state every cycle returns to:
///
/// ```text
/// Idle -> AutoRunning -> Idle
/// Idle -> ManualRunning -> Decelerating -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumCountMacro)]
#[strum(serialize_all = "kebab-case")]
pub enum SpinMode {
    #[default]
    Idle,

    /// Easing towards a random target over a fixed duration.
    AutoRunning,

    /// Turning at constant velocity until a manual stop.
    ManualRunning,

    /// Slowing down after a manual stop.
    Decelerating,
}

/// Rotation and timing of the wheel.
#[derive(Debug, Clone, Default)]
pub struct SpinState {
    /// Accumulated rotation in radians. Never reset between cycles, so the
    /// next spin starts where the last one stopped.
    pub current_rotation: f64,

    pub mode: SpinMode,

    /// Rotation an auto spin eases towards.
    pub target_rotation: Option<f64>,

    /// Rotation captured when the current cycle started.
    pub initial_rotation: Option<f64>,

    /// Radians per tick; used by manual spins only.
    pub velocity: f64,

    /// Timestamp at which the current cycle started.
    pub start: Duration,

    /// Length of an auto spin.
    pub duration: Duration,
}

impl SpinState {
    pub fn is_spinning(&self) -> bool {
        self.mode != SpinMode::Idle
    }

    /// Return to `Idle`, clearing everything that belongs to the finished
    /// cycle. `current_rotation` is kept.
    pub fn reset_to_idle(&mut self) {
        *self = Self {
            current_rotation: self.current_rotation,
            ..Self::default()
        };
    }
}
