// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segment allocation.
//!
//! Converts a list of weighted entries into contiguous angular segments that
//! together cover exactly one turn of the wheel.
//!
//! # Strategies
//!
//! - [`Strategy::Individual`]: each entry gets `weight / total_weight` of the
//!   wheel, in input order.
//! - [`Strategy::Group`]: each group gets an equal share of the wheel,
//!   whatever its members weigh; members split their group's share by weight.
//!   All members of a group are laid out together, groups in first-seen order.
//!
//! # Example
//!
//! ```
//! use prize_wheel::allocation::allocate;
//! use prize_wheel::entry::{Entry, Strategy};
//! use std::f64::consts::PI;
//!
//! let entries = vec![
//!     Entry::new("A", "X", 1.0),
//!     Entry::new("B", "X", 1.0),
//!     Entry::new("C", "Y", 2.0),
//! ];
//!
//! let segments = allocate(&entries, Strategy::Individual);
//! assert!((segments[2].span() - PI).abs() < 1e-9);
//! ```

pub mod palette;
pub mod segment;

pub use palette::{ColorMap, DEFAULT_PALETTE};
pub use segment::Segment;

use log::warn;

use crate::entry::{Entry, Strategy};
use crate::geometry::FULL_TURN;

/// Allocate segments using the default palette.
pub fn allocate(entries: &[Entry], strategy: Strategy) -> Vec<Segment> {
    allocate_with_palette(entries, strategy, &DEFAULT_PALETTE)
}

/// Allocate segments, coloring groups from `palette`.
///
/// Returns an empty list for empty input. The first segment starts at 0 and
/// the last one ends at exactly 2π.
pub fn allocate_with_palette(entries: &[Entry], strategy: Strategy, palette: &[&str]) -> Vec<Segment> {
    if entries.is_empty() {
        return Vec::new();
    }

    let colors = ColorMap::build(entries, palette);
    let mut layout = Layout::new(&colors, entries.len());

    match strategy {
        Strategy::Individual => {
            let members: Vec<&Entry> = entries.iter().collect();
            layout.fill(&members, FULL_TURN);
        }
        Strategy::Group => {
            let angle_per_group = FULL_TURN / colors.groups().len() as f64;
            for group in colors.groups() {
                let members: Vec<&Entry> = entries.iter().filter(|e| e.group() == *group).collect();
                layout.fill(&members, angle_per_group);
            }
        }
    }

    layout.finish()
}

/// Running state while laying segments around the wheel.
struct Layout<'a> {
    colors: &'a ColorMap<'a>,
    angle: f64,
    segments: Vec<Segment>,
}

impl<'a> Layout<'a> {
    fn new(colors: &'a ColorMap<'a>, capacity: usize) -> Self {
        Self {
            colors,
            angle: 0.0,
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Lay out `members` consecutively over `slice` radians, by weight.
    ///
    /// Falls back to an equal split when the members' total weight is not
    /// positive and finite.
    fn fill(&mut self, members: &[&Entry], slice: f64) {
        let total: f64 = members.iter().map(|e| e.weight()).sum();
        let weighted = total.is_finite() && total > 0.0;
        if !weighted {
            warn!(
                "total weight {} of {} entries is unusable; splitting slice equally",
                total,
                members.len()
            );
        }

        for entry in members {
            let fraction = if weighted {
                entry.weight() / total
            } else {
                1.0 / members.len() as f64
            };
            self.push(entry, fraction * slice);
        }
    }

    fn push(&mut self, entry: &Entry, size: f64) {
        let start_angle = self.angle;
        let end_angle = start_angle + size;
        self.segments.push(Segment {
            name: entry.name().to_string(),
            group: entry.group().to_string(),
            start_angle,
            end_angle,
            color: self
                .colors
                .color_of(entry.group())
                .unwrap_or(DEFAULT_PALETTE[0])
                .to_string(),
            weight: entry.weight(),
        });
        self.angle = end_angle;
    }

    /// Close the wheel: rounding must not leave a sliver under the pointer
    /// that no segment covers.
    fn finish(mut self) -> Vec<Segment> {
        if let Some(last) = self.segments.last_mut() {
            last.end_angle = FULL_TURN;
        }
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("A", "X", 1.0),
            Entry::new("B", "X", 1.0),
            Entry::new("C", "Y", 2.0),
        ]
    }

    fn spans(segments: &[Segment]) -> Vec<f64> {
        segments.iter().map(Segment::span).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(allocate(&[], Strategy::Individual).is_empty());
        assert!(allocate(&[], Strategy::Group).is_empty());
    }

    #[test]
    fn test_individual_example() {
        let segments = allocate(&sample(), Strategy::Individual);
        let expected = [PI / 2.0, PI / 2.0, PI];
        for (span, want) in spans(&segments).iter().zip(expected) {
            assert!((span - want).abs() < TOLERANCE, "{} != {}", span, want);
        }
    }

    #[test]
    fn test_group_example() {
        let entries = vec![
            Entry::new("A", "X", 1.0),
            Entry::new("C", "Y", 5.0),
            Entry::new("B", "X", 1.0),
        ];
        let segments = allocate(&entries, Strategy::Group);
        let names: Vec<_> = segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        let expected = [PI / 2.0, PI / 2.0, PI];
        for (span, want) in spans(&segments).iter().zip(expected) {
            assert!((span - want).abs() < TOLERANCE, "{} != {}", span, want);
        }
    }

    #[test]
    fn test_single_entry_covers_wheel() {
        let entries = vec![Entry::ungrouped("Only", 3.0)];
        for strategy in [Strategy::Individual, Strategy::Group] {
            let segments = allocate(&entries, strategy);
            assert_eq!(segments.len(), 1);
            assert_eq!(segments[0].start_angle, 0.0);
            assert_eq!(segments[0].end_angle, FULL_TURN);
        }
    }

    #[test]
    fn test_contiguous_and_closed() {
        let entries: Vec<_> = (1..=7)
            .map(|i| Entry::new(&format!("e{}", i), if i % 2 == 0 { "even" } else { "odd" }, i as f64 * 0.7))
            .collect();
        for strategy in [Strategy::Individual, Strategy::Group] {
            let segments = allocate(&entries, strategy);
            assert_eq!(segments[0].start_angle, 0.0);
            assert_eq!(segments.last().unwrap().end_angle, FULL_TURN);
            for pair in segments.windows(2) {
                assert_eq!(pair[0].end_angle, pair[1].start_angle);
            }
        }
    }

    #[test]
    fn test_equal_split_guard() {
        let b = Entry::new("B", "X", 3.0);
        let colors = ColorMap::build(std::slice::from_ref(&b), &DEFAULT_PALETTE);
        let mut layout = Layout::new(&colors, 3);
        // Entry weights are always positive, so force the fallback with a
        // total that overflows to infinity.
        let huge = Entry::new("H", "X", f64::MAX);
        layout.fill(&[&huge, &huge, &b], PI);
        let segments = layout.finish();
        for span in spans(&segments[..2]) {
            assert!((span - PI / 3.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_colors_follow_groups() {
        let segments = allocate(&sample(), Strategy::Individual);
        assert_eq!(segments[0].color, segments[1].color);
        assert_ne!(segments[0].color, segments[2].color);
        assert_eq!(segments[0].color, DEFAULT_PALETTE[0]);
        assert_eq!(segments[2].color, DEFAULT_PALETTE[1]);
    }

    #[test]
    fn test_custom_palette() {
        let segments = allocate_with_palette(&sample(), Strategy::Group, &["#111111"]);
        assert!(segments.iter().all(|s| s.color == "#111111"));
    }
}
