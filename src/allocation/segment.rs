// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Angular segments of the wheel.

use crate::geometry::FULL_TURN;

/// One angular slice of the wheel, produced for one entry.
///
/// Angles are in radians on the wheel's own frame, before any rotation.
/// A segment covers the half-open interval `[start_angle, end_angle)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub group: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Group color, as a CSS hex string.
    pub color: String,
    /// Weight of the entry this segment was built from.
    pub weight: f64,
}

impl Segment {
    /// Angular size of the segment.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway through the segment, where a renderer places its label.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.span() / 2.0
    }

    /// Fraction of the wheel covered, which is also the chance of winning a
    /// uniformly random stop.
    pub fn share(&self) -> f64 {
        self.span() / FULL_TURN
    }

    /// Whether `angle` (already normalised to [0, 2π)) falls in this segment.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}
