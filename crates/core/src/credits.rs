//! Producer-credit tokenization: split one credit string into individual
//! producer names.
//!
//! Separators are the comma and the standalone word "and" (case-insensitive,
//! word-bounded). Semicolons are deliberately NOT separators: a credit such
//! as `"Joe Roth; Jeff Kirschenbaum; and Susan Downey"` (a quoted CSV
//! sub-field) yields the merged identity `"Joe Roth; Jeff Kirschenbaum;"`
//! alongside `"Susan Downey"`. Downstream consumers are pinned to this
//! behavior, so it must not be "fixed" here.

use regex::Regex;
use std::sync::OnceLock;

/// Separator pattern: comma, or the word "and" bounded on both sides.
fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"(?i),|\band\b").expect("valid separator pattern"))
}

/// Split a producer credit into individual producer names.
///
/// Tokens are trimmed; empty tokens (trailing separators, "A, , B") are
/// dropped; exact duplicates within one credit are collapsed, keeping the
/// first occurrence's position. Any input, including the empty string,
/// produces zero or more names without failing.
pub fn split_producers(credit: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in separator().split(credit) {
        let name = token.trim();
        if name.is_empty() {
            continue;
        }
        if names.iter().any(|seen| seen == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}
