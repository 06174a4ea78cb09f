//! Output formatting for CLI display.

use crate::model::History;

/// Keyboard bindings per button label, in keypad order.
const KEY_BINDINGS: &[(&str, &str)] = &[
    ("AC", "c, esc"),
    ("-/+", "n"),
    ("%", "%"),
    ("+", "+"),
    ("-", "-"),
    ("x", "*, x"),
    ("÷", "/"),
    ("=", "=, enter"),
    (".", "., ,"),
    ("0-9", "0-9"),
];

/// One numbered line per calculation: `1. 7 + 3 = 10`.
pub(super) fn format_history(history: &History) -> Vec<String> {
    if history.is_empty() {
        return vec!["No calculations".to_string()];
    }
    history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry.to_string().replace(" \n ", " ")))
        .collect()
}

pub(super) fn format_key_table() -> Vec<String> {
    let mut lines: Vec<String> = KEY_BINDINGS
        .iter()
        .map(|(label, keys)| format!("{label:>4}  {keys}"))
        .collect();
    lines.push(String::new());
    lines.push("   h  history (x clears it)".to_string());
    lines.push("   q  quit".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Button, HistoryEntry};

    #[test]
    fn history_lines_are_numbered_and_flat() {
        let mut history = History::default();
        history.push(HistoryEntry::new(7.0, "+", 3.0, "10.0"));
        history.push(HistoryEntry::new(10.0, "÷", 4.0, "2.5"));

        assert_eq!(
            format_history(&history),
            ["1. 7 + 3 = 10", "2. 10 ÷ 4 = 2.5"]
        );
    }

    #[test]
    fn empty_history() {
        assert_eq!(format_history(&History::default()), ["No calculations"]);
    }

    #[test]
    fn single_char_bindings_match_the_keypad() {
        for (label, keys) in KEY_BINDINGS {
            let Ok(button) = label.parse::<Button>() else {
                continue; // "0-9"
            };
            for key in keys.split(", ") {
                let mut chars = key.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    assert_eq!(Button::from_key(c), Some(button), "key {key} for {label}");
                }
            }
        }
    }

    #[test]
    fn key_table_lists_every_label() {
        let table = format_key_table().join("\n");
        for label in ["AC", "-/+", "%", "÷", "x", "="] {
            assert!(table.contains(label), "missing {label}");
        }
    }
}
