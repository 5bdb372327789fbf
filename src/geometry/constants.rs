// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Angular constants for the wheel.
//!
//! All angles are in radians. Angle 0 is the reference axis (three o'clock on
//! a screen), and angles grow in the direction the wheel rotates (clockwise
//! on a screen, where y points down).

use std::f64::consts::PI;

/// One full turn of the wheel.
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// Fixed position of the pointer: twelve o'clock.
///
/// In screen coordinates 0 is right, π/2 is bottom, π is left and 3π/2 is top.
pub const POINTER_ANGLE: f64 = 1.5 * PI;

/// Tolerance used when comparing accumulated angles.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Rotation magnitude past which a free-running spin folds its accumulator
/// back by whole turns.
///
/// Folding never changes which segment sits under the pointer.
pub const FOLD_THRESHOLD: f64 = 1024.0 * FULL_TURN;
