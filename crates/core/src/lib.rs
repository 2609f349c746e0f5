//! razzie-core: producer win-interval analysis core library.
//!
//! Given a list of award records (year, title, studio, producer credit,
//! winner flag), computes the year gaps between consecutive wins for every
//! producer with more than one win, and selects the producers with the
//! smallest and largest such gap.
//!
//! # Public API
//!
//! Key types and entry points are re-exported at the crate root:
//!
//! - [`analyze()`] -- run the full pipeline over a record slice
//! - [`MovieRecord`], [`WinInterval`], [`IntervalSummary`] -- data model
//! - [`split_producers()`] -- producer-credit tokenization
//! - [`group_wins()`], [`WinHistory`] -- per-producer win grouping
//! - [`compute_intervals()`] -- consecutive-win interval records
//! - [`select_extrema()`] -- global min/max interval selection
//! - [`load_csv()`], [`parse_csv()`], [`DatasetError`] -- CSV ingestion

/// Version string reported by the /health endpoint.
pub const RAZZIE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analyze;
pub mod credits;
pub mod dataset;
pub mod extrema;
pub mod group;
pub mod intervals;
pub mod record;

// ── Convenience re-exports: key types ────────────────────────────────

pub use dataset::DatasetError;
pub use group::WinHistory;
pub use record::{IntervalSummary, MovieRecord, WinInterval};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use analyze::analyze;
pub use credits::split_producers;
pub use dataset::{load_csv, parse_csv};
pub use extrema::select_extrema;
pub use group::group_wins;
pub use intervals::compute_intervals;
