// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wheel entries and allocation strategies.
//!
//! An [`Entry`] is one named, weighted, grouped item to be placed on the
//! wheel. Entries are immutable once built; construction applies the same
//! coercion rules as the text parser in [`parse`].

pub mod parse;

pub use parse::{parse_entries, parse_weight};

use strum_macros::{Display, EnumIter, EnumString};

/// Group assigned to entries that do not name one.
pub const DEFAULT_GROUP: &str = "Default";

/// Weight assigned to entries whose weight is missing or unusable.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Coerce a raw weight into a usable one.
///
/// Non-finite and non-positive weights become [`DEFAULT_WEIGHT`].
pub fn coerce_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        DEFAULT_WEIGHT
    }
}

/// One named, weighted, grouped item on the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    group: String,
    weight: f64,
}

impl Entry {
    /// Create a new entry, panicking if the name is blank.
    ///
    /// A blank group becomes [`DEFAULT_GROUP`] and the weight is coerced
    /// with [`coerce_weight`].
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty after trimming.
    pub fn new(name: &str, group: &str, weight: f64) -> Self {
        match Self::try_new(name, group, weight) {
            Some(entry) => entry,
            None => panic!("Entry name must not be blank"),
        }
    }

    /// Try to create a new entry, returning None if the name is blank.
    pub fn try_new(name: &str, group: &str, weight: f64) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let group = match group.trim() {
            "" => DEFAULT_GROUP,
            trimmed => trimmed,
        };
        Some(Self {
            name: name.to_string(),
            group: group.to_string(),
            weight: coerce_weight(weight),
        })
    }

    /// Create an entry in the default group.
    pub fn ungrouped(name: &str, weight: f64) -> Self {
        Self::new(name, DEFAULT_GROUP, weight)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// The coerced weight; always finite and positive.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// How the wheel's circumference is shared between entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// Every entry's slice is proportional to its weight over all entries.
    #[default]
    Individual,

    /// Every group gets an equal slice, shared among its members by weight.
    Group,
}
