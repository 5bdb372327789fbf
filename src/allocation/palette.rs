// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group discovery and color assignment.

use std::collections::HashMap;

use crate::entry::Entry;

/// Colors handed out to groups, in order of first appearance.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#E7E9ED", "#71B37C",
    "#EC932F", "#5D4C46", "#2A2B2D", "#8C4646",
];

/// Distinct groups of an entry list, each mapped to one palette color.
///
/// Groups are kept in first-seen order. The i-th group gets
/// `palette[i % palette.len()]`, so colors repeat only once the palette is
/// exhausted.
#[derive(Debug)]
pub struct ColorMap<'a> {
    groups: Vec<&'a str>,
    colors: HashMap<&'a str, &'a str>,
}

impl<'a> ColorMap<'a> {
    /// Build the map for `entries`. An empty palette falls back to
    /// [`DEFAULT_PALETTE`].
    pub fn build(entries: &'a [Entry], palette: &'a [&'a str]) -> Self {
        let palette: &[&str] = if palette.is_empty() {
            &DEFAULT_PALETTE
        } else {
            palette
        };

        let mut groups = Vec::new();
        let mut colors = HashMap::new();
        for entry in entries {
            let group = entry.group();
            if !colors.contains_key(group) {
                colors.insert(group, palette[groups.len() % palette.len()]);
                groups.push(group);
            }
        }

        Self { groups, colors }
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[&'a str] {
        &self.groups
    }

    /// Color assigned to `group`, or None if no entry had that group.
    pub fn color_of(&self, group: &str) -> Option<&'a str> {
        self.colors.get(group).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let entries = vec![
            Entry::new("a", "Y", 1.0),
            Entry::new("b", "X", 1.0),
            Entry::new("c", "Y", 1.0),
        ];
        let map = ColorMap::build(&entries, &DEFAULT_PALETTE);
        assert_eq!(map.groups(), ["Y", "X"]);
        assert_eq!(map.color_of("Y"), Some(DEFAULT_PALETTE[0]));
        assert_eq!(map.color_of("X"), Some(DEFAULT_PALETTE[1]));
        assert_eq!(map.color_of("Z"), None);
    }

    #[test]
    fn test_palette_wraps() {
        let palette = ["#000000", "#FFFFFF"];
        let entries: Vec<_> = ["g0", "g1", "g2"]
            .iter()
            .map(|g| Entry::new("item", g, 1.0))
            .collect();
        let map = ColorMap::build(&entries, &palette);
        assert_eq!(map.color_of("g0"), Some("#000000"));
        assert_eq!(map.color_of("g1"), Some("#FFFFFF"));
        assert_eq!(map.color_of("g2"), Some("#000000"));
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let entries = vec![Entry::new("a", "X", 1.0)];
        let map = ColorMap::build(&entries, &[]);
        assert_eq!(map.color_of("X"), Some(DEFAULT_PALETTE[0]));
    }
}
