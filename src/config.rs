// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable parameters of the spin engine.
//!
//! The defaults reproduce the classic wheel feel: an auto spin travels
//! between 5 and 10 full turns, a manual spin turns at half a radian per
//! frame and loses 2% of its speed per frame once stopped.

use crate::geometry::POINTER_ANGLE;

/// Full turns every auto spin makes at least.
pub const DEFAULT_MIN_TURNS: f64 = 5.0;

/// Upper bound (exclusive) of the random extra turns of an auto spin.
pub const DEFAULT_EXTRA_TURNS: f64 = 5.0;

/// Radians per frame of a manual spin.
pub const DEFAULT_MANUAL_VELOCITY: f64 = 0.5;

/// Velocity multiplier per frame while decelerating.
pub const DEFAULT_DECAY: f64 = 0.98;

/// Velocity below which a decelerating spin stops.
pub const DEFAULT_STOP_VELOCITY: f64 = 0.001;

/// Spin length used when the caller gives none.
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    pub min_turns: f64,
    pub extra_turns: f64,
    pub manual_velocity: f64,
    /// Must lie in (0, 1) for a manual stop to terminate.
    pub decay: f64,
    pub stop_velocity: f64,
    /// Angle, on the screen frame, of the pointer that picks the winner.
    pub pointer_angle: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_turns: DEFAULT_MIN_TURNS,
            extra_turns: DEFAULT_EXTRA_TURNS,
            manual_velocity: DEFAULT_MANUAL_VELOCITY,
            decay: DEFAULT_DECAY,
            stop_velocity: DEFAULT_STOP_VELOCITY,
            pointer_angle: POINTER_ANGLE,
        }
    }
}

impl SpinConfig {
    /// Number of frames a manual spin needs to come to rest after a stop,
    /// or None if these settings never bring it to rest.
    pub fn deceleration_frames(&self) -> Option<usize> {
        let mut velocity = self.manual_velocity * self.decay;
        if velocity < self.stop_velocity {
            return Some(1);
        }
        if !(self.decay < 1.0 && self.stop_velocity > 0.0 && velocity.is_finite()) {
            return None;
        }

        let mut frames = 1;
        while velocity >= self.stop_velocity {
            velocity *= self.decay;
            frames += 1;
        }
        Some(frames)
    }
}
