//! Data model: award records, win intervals, and the min/max summary.

use serde::{Deserialize, Serialize};

/// One award record -- a nominated or awarded work in a given year.
///
/// `title` and `studios` are carried through ingestion but play no part in
/// the interval analysis; only `year`, `producers`, and `winner` do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: i32,
    pub title: String,
    pub studios: String,
    /// Raw producer credit naming one or more people, joined by commas
    /// and/or the word "and".
    pub producers: String,
    #[serde(default)]
    pub winner: bool,
}

/// The year gap between two consecutive wins by the same producer identity.
///
/// `interval == 0` is valid: the same producer can win twice in one year
/// via two different records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinInterval {
    pub producer: String,
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Final analysis result: every interval matching the global minimum and
/// every interval matching the global maximum, in first-seen order.
///
/// Both lists are empty when no producer has two or more wins. When all
/// intervals share one value, `min` and `max` hold the same entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalSummary {
    pub min: Vec<WinInterval>,
    pub max: Vec<WinInterval>,
}
