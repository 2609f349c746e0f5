//! Win grouping: collect winning years per producer identity.
//!
//! Only records with `winner == true` participate. Producer identity is the
//! trimmed name string exactly as produced by [`crate::credits`] -- no fuzzy
//! matching or canonicalization beyond trimming.

use std::collections::HashMap;

use crate::credits::split_producers;
use crate::record::MovieRecord;

/// Winning years for one producer, in input record order (unsorted).
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerWins {
    pub producer: String,
    pub years: Vec<i32>,
}

/// Per-producer win years, iterable in first-seen order.
///
/// Backed by a `Vec` of entries plus a name-to-position index, so iteration
/// order is deterministic (insertion order of first appearance) while
/// lookups stay O(1).
#[derive(Debug, Default)]
pub struct WinHistory {
    entries: Vec<ProducerWins>,
    index: HashMap<String, usize>,
}

impl WinHistory {
    /// Append `year` to `producer`'s win list, creating the entry on first
    /// appearance. Equal years are kept: two wins in one year are two wins.
    fn record_win(&mut self, producer: &str, year: i32) {
        match self.index.get(producer) {
            Some(&pos) => self.entries[pos].years.push(year),
            None => {
                self.index.insert(producer.to_string(), self.entries.len());
                self.entries.push(ProducerWins {
                    producer: producer.to_string(),
                    years: vec![year],
                });
            }
        }
    }

    /// Iterate producers in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ProducerWins> {
        self.entries.iter()
    }

    /// Win years recorded for a producer, if any.
    pub fn years(&self, producer: &str) -> Option<&[i32]> {
        self.index
            .get(producer)
            .map(|&pos| self.entries[pos].years.as_slice())
    }

    /// Number of distinct producer identities with at least one win.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Group winning records by producer identity.
///
/// Non-winning records are skipped. For each winning record, every producer
/// named in its credit gets the record's year appended.
pub fn group_wins(records: &[MovieRecord]) -> WinHistory {
    let mut history = WinHistory::default();
    for record in records.iter().filter(|r| r.winner) {
        for producer in split_producers(&record.producers) {
            history.record_win(&producer, record.year);
        }
    }
    history
}
