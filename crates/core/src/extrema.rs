//! Extrema selection: extract every interval matching the global minimum
//! and every interval matching the global maximum.

use crate::record::{IntervalSummary, WinInterval};

/// Select the globally smallest and largest intervals.
///
/// An empty input yields an empty summary. Ties are all kept, in their
/// original relative order, without deduplicating by producer. When every
/// interval shares one value (including a single-interval input), `min` and
/// `max` contain the same entries.
pub fn select_extrema(intervals: &[WinInterval]) -> IntervalSummary {
    let Some(first) = intervals.first() else {
        return IntervalSummary::default();
    };

    let mut min_value = first.interval;
    let mut max_value = first.interval;
    for entry in intervals {
        min_value = min_value.min(entry.interval);
        max_value = max_value.max(entry.interval);
    }

    IntervalSummary {
        min: intervals
            .iter()
            .filter(|e| e.interval == min_value)
            .cloned()
            .collect(),
        max: intervals
            .iter()
            .filter(|e| e.interval == max_value)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(producer: &str, previous: i32, following: i32) -> WinInterval {
        WinInterval {
            producer: producer.to_string(),
            interval: following - previous,
            previous_win: previous,
            following_win: following,
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let summary = select_extrema(&[]);
        assert!(summary.min.is_empty());
        assert!(summary.max.is_empty());
    }

    #[test]
    fn min_and_max_are_selected() {
        let intervals = vec![
            interval("A", 1990, 1991),
            interval("B", 2002, 2015),
            interval("C", 2000, 2005),
        ];
        let summary = select_extrema(&intervals);
        assert_eq!(summary.min, vec![interval("A", 1990, 1991)]);
        assert_eq!(summary.max, vec![interval("B", 2002, 2015)]);
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let intervals = vec![
            interval("B", 2000, 2001),
            interval("A", 1990, 1991),
            interval("C", 1980, 1995),
        ];
        let summary = select_extrema(&intervals);
        let producers: Vec<&str> = summary.min.iter().map(|e| e.producer.as_str()).collect();
        assert_eq!(producers, vec!["B", "A"]);
    }

    #[test]
    fn same_producer_can_tie_with_itself() {
        let intervals = vec![interval("A", 1990, 1991), interval("A", 1991, 1992)];
        let summary = select_extrema(&intervals);
        assert_eq!(summary.min.len(), 2);
        assert_eq!(summary.max.len(), 2);
    }

    #[test]
    fn single_interval_appears_in_both_lists() {
        let intervals = vec![interval("A", 1990, 1995)];
        let summary = select_extrema(&intervals);
        assert_eq!(summary.min, summary.max);
        assert_eq!(summary.min, intervals);
    }
}
