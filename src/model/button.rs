//! Button types: the closed set of keys on the calculator pad.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Operation;

/// A single key on the calculator pad.
///
/// Buttons carry no state and no styling. Colors live in the TUI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    Digit(Digit),
    Decimal,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    SignToggle,
    Percent,
}

/// A decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Builds a digit from its numeric value. Returns `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Builds a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self)
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A button label that doesn't name any key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button '{0}'")]
pub struct ParseButtonError(pub String);

impl Button {
    /// The label printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS[usize::from(d.0)],
            Self::Decimal => ".",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::SignToggle => "-/+",
            Self::Percent => "%",
        }
    }

    /// The operation an operator key selects, if this is an operator key.
    pub fn operation(self) -> Option<Operation> {
        match self {
            Self::Add => Some(Operation::Add),
            Self::Subtract => Some(Operation::Subtract),
            Self::Multiply => Some(Operation::Multiply),
            Self::Divide => Some(Operation::Divide),
            Self::Equals => Some(Operation::Equals),
            _ => None,
        }
    }

    /// Maps a typed character to a button.
    ///
    /// Accepts the key labels plus the usual keyboard stand-ins
    /// (`*` for multiply, `/` for divide, `n` for sign toggle, `c` for clear).
    pub fn from_key(c: char) -> Option<Self> {
        if let Some(d) = Digit::from_char(c) {
            return Some(Self::Digit(d));
        }
        match c {
            '.' | ',' => Some(Self::Decimal),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            'n' | 'N' => Some(Self::SignToggle),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" | "ac" | "clear" => return Ok(Self::Clear),
            "-/+" | "+/-" | "neg" => return Ok(Self::SignToggle),
            "÷" => return Ok(Self::Divide),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_key(c).ok_or_else(|| ParseButtonError(s.to_string())),
            _ => Err(ParseButtonError(s.to_string())),
        }
    }
}
