//! Interval computation: convert each producer's win years into
//! consecutive-win interval records.

use crate::group::WinHistory;
use crate::record::WinInterval;

/// Compute consecutive-win intervals for every producer with two or more
/// wins.
///
/// Each producer's years are sorted ascending (stable), and every adjacent
/// pair produces one [`WinInterval`]: `k` wins yield exactly `k - 1`
/// records, no pairing across non-adjacent years. Producers with a single
/// win contribute nothing. Output concatenates per-producer runs in the
/// grouping's first-seen order.
pub fn compute_intervals(history: &WinHistory) -> Vec<WinInterval> {
    let mut intervals = Vec::new();
    for wins in history.iter() {
        if wins.years.len() < 2 {
            continue;
        }
        let mut years = wins.years.clone();
        years.sort();
        for pair in years.windows(2) {
            intervals.push(WinInterval {
                producer: wins.producer.clone(),
                interval: pair[1] - pair[0],
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }
    intervals
}
