// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line-oriented parser for wheel entries.
//!
//! Input is plain text or CSV with one entry per line:
//!
//! ```text
//! Name, Group, Weight
//! ```
//!
//! Group and weight are optional. Blank lines and lines with a blank name are
//! skipped; extra columns are ignored.

use super::{coerce_weight, Entry, DEFAULT_GROUP, DEFAULT_WEIGHT};

/// Parse every usable line of `input` into an entry, in input order.
///
/// # Example
///
/// ```
/// use prize_wheel::entry::parse_entries;
///
/// let entries = parse_entries("Alice, Red, 2\nBob\n\n, Blue, 3\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].weight(), 2.0);
/// assert_eq!(entries[1].group(), "Default");
/// ```
pub fn parse_entries(input: &str) -> Vec<Entry> {
    input.lines().filter_map(parse_line).collect()
}

/// Parse a single line, returning None for blank or nameless lines.
pub fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut columns = line.split(',');
    let name = columns.next().unwrap_or_default();
    let group = columns.next().unwrap_or(DEFAULT_GROUP);
    let weight = columns.next().map_or(DEFAULT_WEIGHT, parse_weight);

    Entry::try_new(name, group, weight)
}

/// Parse a weight column.
///
/// The longest numeric prefix is used (`"2.5kg"` reads as 2.5). Anything
/// without a numeric prefix, and any non-positive value, reads as
/// [`DEFAULT_WEIGHT`].
pub fn parse_weight(column: &str) -> f64 {
    leading_number(column.trim()).map_or(DEFAULT_WEIGHT, coerce_weight)
}

/// Length-limited float scan: sign, digits, optional fraction, optional exponent.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let entry = parse_line("  Alice , Red , 3 ").unwrap();
        assert_eq!(entry.name(), "Alice");
        assert_eq!(entry.group(), "Red");
        assert_eq!(entry.weight(), 3.0);
    }

    #[test]
    fn test_parse_missing_columns() {
        let entry = parse_line("Bob").unwrap();
        assert_eq!(entry.group(), DEFAULT_GROUP);
        assert_eq!(entry.weight(), DEFAULT_WEIGHT);

        let entry = parse_line("Bob,,").unwrap();
        assert_eq!(entry.group(), DEFAULT_GROUP);
        assert_eq!(entry.weight(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_parse_skips_blank_and_nameless() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line(" , Red, 2").is_none());
    }

    #[test]
    fn test_parse_weight_coercion() {
        assert_eq!(parse_weight("abc"), 1.0);
        assert_eq!(parse_weight("-5"), 1.0);
        assert_eq!(parse_weight("0"), 1.0);
        assert_eq!(parse_weight(""), 1.0);
        assert_eq!(parse_weight("."), 1.0);
        assert_eq!(parse_weight("NaN"), 1.0);
    }

    #[test]
    fn test_parse_weight_prefix() {
        assert_eq!(parse_weight("2.5kg"), 2.5);
        assert_eq!(parse_weight(" 4 "), 4.0);
        assert_eq!(parse_weight(".5"), 0.5);
        assert_eq!(parse_weight("3."), 3.0);
        assert_eq!(parse_weight("+7"), 7.0);
        assert_eq!(parse_weight("1e2"), 100.0);
        assert_eq!(parse_weight("2e"), 2.0);
        assert_eq!(parse_weight("6e+x"), 6.0);
    }

    #[test]
    fn test_parse_entries_crlf() {
        let entries = parse_entries("A,X,1\r\nB,X,1\r\nC,Y,2\r\n");
        let names: Vec<_> = entries.iter().map(Entry::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(entries[2].group(), "Y");
        assert_eq!(entries[2].weight(), 2.0);
    }

    #[test]
    fn test_parse_entries_ignores_extra_columns() {
        let entries = parse_entries("A, X, 2, ignored, also ignored");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weight(), 2.0);
    }

    #[test]
    fn test_parse_entries_empty() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries("\n\n  \n").is_empty());
    }
}
