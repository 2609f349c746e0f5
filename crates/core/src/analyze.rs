//! Pipeline orchestration: records in, min/max interval summary out.

use crate::extrema::select_extrema;
use crate::group::group_wins;
use crate::intervals::compute_intervals;
use crate::record::{IntervalSummary, MovieRecord};

/// Run the full analysis: group wins per producer, compute consecutive-win
/// intervals, select the global extrema.
///
/// Pure and deterministic: the same input slice always yields a structurally
/// equal summary, and concurrent callers with disjoint inputs need no
/// coordination.
pub fn analyze(records: &[MovieRecord]) -> IntervalSummary {
    let history = group_wins(records);
    let intervals = compute_intervals(&history);
    select_extrema(&intervals)
}
