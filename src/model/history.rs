//! History types: the running log of completed calculations.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::state::number_to_string;
use crate::display::format_integers;

/// One completed calculation. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    left: f64,
    symbol: String,
    right: f64,
    result: String,
    recorded_at: Timestamp,
}

impl HistoryEntry {
    pub fn new(left: f64, symbol: impl Into<String>, right: f64, result: impl Into<String>) -> Self {
        Self {
            left,
            symbol: symbol.into(),
            right,
            result: result.into(),
            recorded_at: Timestamp::now(),
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}

/// Renders as `"{left} {symbol} {right} \n = {result}"`.
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} \n = {}",
            format_integers(&number_to_string(self.left)),
            self.symbol,
            format_integers(&number_to_string(self.right)),
            format_integers(&self.result),
        )
    }
}

/// Append-only log of calculations, in the order they completed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Drops every entry. There is no way to remove a single one.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_renders_whole_numbers_without_decimals() {
        let entry = HistoryEntry::new(7.0, "+", 3.0, "10.0");
        assert_eq!(entry.to_string(), "7 + 3 \n = 10");
    }

    #[test]
    fn entry_keeps_fractions() {
        let entry = HistoryEntry::new(1.5, "x", 3.0, "4.5");
        assert_eq!(entry.to_string(), "1.5 x 3 \n = 4.5");
    }

    #[test]
    fn history_is_chronological_and_clears_whole() {
        let mut history = History::default();
        history.push(HistoryEntry::new(1.0, "+", 1.0, "2.0"));
        history.push(HistoryEntry::new(2.0, "x", 2.0, "4.0"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].result(), "2.0");
        assert_eq!(history.entries()[1].result(), "4.0");

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_as_a_list() {
        let mut history = History::default();
        history.push(HistoryEntry::new(7.0, "+", 3.0, "10.0"));

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json[0]["symbol"], "+");
        assert_eq!(json[0]["result"], "10.0");
        assert!(json[0]["recordedAt"].is_string());
    }
}
