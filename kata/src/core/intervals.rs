//! Merging of closed integer intervals.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

/// A closed range `[start, end]`.
///
/// `start <= end` is assumed but not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Parses `START,END`.
impl FromStr for Interval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("interval '{}' must look like START,END", s))?;
        let start = start
            .trim()
            .parse()
            .with_context(|| format!("interval '{}': invalid start", s))?;
        let end = end
            .trim()
            .parse()
            .with_context(|| format!("interval '{}': invalid end", s))?;
        Ok(Self { start, end })
    }
}

/// Merge overlapping intervals into a start-ascending, disjoint list.
///
/// Touching intervals (`next.start == current.end`) are merged. The sort is
/// stable, so equal starts keep their input order.
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(current) if next.start <= current.end => {
                current.end = current.end.max(next.end);
            }
            _ => merged.push(next),
        }
    }
    merged
}

/// Render intervals as `[[a, b], [c, d]]`.
pub fn format_intervals(intervals: &[Interval]) -> String {
    let parts: Vec<String> = intervals.iter().map(Interval::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(pairs: &[(i64, i64)]) -> Vec<Interval> {
        pairs.iter().copied().map(Interval::from).collect()
    }

    #[test]
    fn merges_overlapping_ranges() {
        let input = intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)]);
        assert_eq!(merge(&input), intervals(&[(1, 6), (8, 10), (15, 18)]));
    }

    #[test]
    fn touching_boundaries_merge() {
        assert_eq!(merge(&intervals(&[(1, 4), (4, 5)])), intervals(&[(1, 5)]));
    }

    #[test]
    fn adjacent_but_not_touching_stay_apart() {
        let input = intervals(&[(1, 4), (5, 6)]);
        assert_eq!(merge(&input), input);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge(&[]).is_empty());
    }

    #[test]
    fn single_interval_is_unchanged() {
        let input = intervals(&[(7, 9)]);
        assert_eq!(merge(&input), input);
    }

    #[test]
    fn nested_interval_is_absorbed() {
        let input = intervals(&[(1, 10), (2, 5)]);
        assert_eq!(merge(&input), intervals(&[(1, 10)]));
    }

    #[test]
    fn unsorted_input_is_sorted_and_merged() {
        let input = intervals(&[(20, 22), (2, 6), (1, 3), (4, 5), (8, 10), (12, 18)]);
        assert_eq!(
            merge(&input),
            intervals(&[(1, 6), (8, 10), (12, 18), (20, 22)])
        );
    }

    #[test]
    fn output_is_sorted_and_disjoint() {
        let input = intervals(&[(5, 7), (-3, 0), (0, 1), (9, 9), (6, 12), (-10, -8)]);
        let merged = merge(&input);
        assert!(merged.len() <= input.len());
        for pair in merged.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(pair[0].end < pair[1].start);
        }
        for interval in &input {
            assert!(
                merged
                    .iter()
                    .any(|m| m.start <= interval.start && interval.end <= m.end)
            );
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let input = intervals(&[(3, 4), (1, 2)]);
        let _ = merge(&input);
        assert_eq!(input, intervals(&[(3, 4), (1, 2)]));
    }

    #[test]
    fn parses_start_end_pairs() {
        assert_eq!("1,3".parse::<Interval>().expect("parse"), Interval::new(1, 3));
        assert_eq!(
            " -4 , 2 ".parse::<Interval>().expect("parse"),
            Interval::new(-4, 2)
        );
        assert!("1-3".parse::<Interval>().is_err());
        assert!("a,3".parse::<Interval>().is_err());
    }

    #[test]
    fn formats_as_nested_list() {
        let merged = merge(&intervals(&[(1, 4), (4, 5), (8, 10)]));
        assert_eq!(format_intervals(&merged), "[[1, 5], [8, 10]]");
        assert_eq!(format_intervals(&[]), "[]");
    }
}
