//! Calculator state: the value threaded through every key press.

use serde::{Deserialize, Serialize};

use super::Operation;

/// The operand currently being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum Entry {
    /// Nothing typed since the last clear, operator, or percent.
    #[default]
    Rest,

    /// Characters typed by the user, possibly malformed (`"-"`, `"2.5.5"`).
    Typed(String),
}

impl Entry {
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// The entry as typed. Empty at rest.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rest => "",
            Self::Typed(text) => text,
        }
    }

    /// The numeric value of the entry. Anything unparseable counts as zero.
    pub fn value(&self) -> f64 {
        parse_number(self.as_str())
    }
}

/// The full state of one calculator session, minus history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The operand being typed.
    pub entry: Entry,

    /// What the display shows, before formatting.
    pub display: String,

    /// The operand captured when an operator was pressed.
    pub left: Option<f64>,

    /// The right operand of the most recent resolution.
    pub right: f64,

    /// The operator waiting for its right operand.
    pub pending: Operation,

    /// Label of the pending operator, used in history entries.
    pub symbol: String,
}

impl CalculatorState {
    /// The state at session start and after a clear.
    pub fn rest() -> Self {
        Self::default()
    }
}

/// Parses a numeric string, treating anything malformed as zero.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Renders a number the way it is stored in the entry and display.
///
/// Whole numbers keep a trailing `.0` and very large or small magnitudes
/// switch to exponent form (`1e16`), so the text always parses back.
pub fn number_to_string(value: f64) -> String {
    format!("{value:?}")
}
