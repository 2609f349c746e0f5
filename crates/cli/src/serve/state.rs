//! Application state shared across request handlers.

use razzie_core::{IntervalSummary, MovieRecord};

/// Immutable per-server state: the dataset loaded at startup and its
/// precomputed analysis. The analysis is pure, so there is nothing to
/// invalidate or lock.
pub(crate) struct AppState {
    pub(crate) records: Vec<MovieRecord>,
    pub(crate) summary: IntervalSummary,
}
