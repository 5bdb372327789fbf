// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Winner resolution.
//!
//! The wheel is drawn rotated by the engine's rotation; the pointer stays
//! fixed. The winner is the segment whose unrotated interval contains the
//! angle that the rotation carried under the pointer.

use crate::allocation::Segment;
use crate::geometry::under_pointer;

/// Find the segment under `pointer` after the wheel turned by `rotation`.
///
/// Linear in the number of segments. Returns None for an empty list, or if
/// the segments leave the pointed-at angle uncovered.
pub fn resolve_winner(segments: &[Segment], rotation: f64, pointer: f64) -> Option<&Segment> {
    let angle = under_pointer(rotation, pointer);
    segments.iter().find(|segment| segment.contains(angle))
}
