// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use prize_wheel::allocation::Segment;
use prize_wheel::engine::FixedRandom;
use prize_wheel::entry::Entry;
use prize_wheel::SpinEngine;

pub const TOLERANCE: f64 = 1e-9;

/// Build entries from `(name, group, weight)` triples.
pub fn entries(rows: &[(&str, &str, f64)]) -> Vec<Entry> {
    rows.iter()
        .map(|&(name, group, weight)| Entry::new(name, group, weight))
        .collect()
}

/// The three-entry wheel used throughout: A and B in group X, C in group Y.
pub fn sample_entries() -> Vec<Entry> {
    entries(&[("A", "X", 1.0), ("B", "X", 1.0), ("C", "Y", 2.0)])
}

/// Summed span of every group, keyed by group name.
pub fn group_spans(segments: &[Segment]) -> HashMap<String, f64> {
    let mut spans = HashMap::new();
    for segment in segments {
        *spans.entry(segment.group.clone()).or_insert(0.0) += segment.span();
    }
    spans
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {} but got {} (diff {})",
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Engine whose auto spins travel exactly `5 + 5 * unit` turns.
pub fn fixed_engine(unit: f64, segments: Vec<Segment>) -> SpinEngine {
    let mut engine = SpinEngine::with_random(Box::new(FixedRandom(unit)));
    engine.set_segments(segments);
    engine
}
