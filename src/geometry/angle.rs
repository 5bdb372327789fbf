// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Angle arithmetic shared by the allocator and the spin engine.

use super::constants::{FOLD_THRESHOLD, FULL_TURN};

/// Normalise an angle to the half-open range [0, 2π).
///
/// `rem_euclid` can round a tiny negative input up to exactly 2π; that case
/// is folded back to 0 so the result always stays inside the range.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Angle on the wheel's own frame that sits under the pointer.
///
/// The wheel turned by `rotation` carries the point originally at angle `a`
/// to `a + rotation`, so the point under `pointer` started at
/// `pointer - rotation`.
pub fn under_pointer(rotation: f64, pointer: f64) -> f64 {
    normalize(pointer - normalize(rotation))
}

/// Fold a free-running rotation back by whole turns once it grows large.
///
/// Returns the input unchanged while it stays below the fold threshold.
pub fn fold_turns(rotation: f64) -> f64 {
    if rotation.abs() > FOLD_THRESHOLD {
        normalize(rotation)
    } else {
        rotation
    }
}
