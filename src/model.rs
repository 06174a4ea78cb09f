//! Core data model for Tally.
//!
//! Buttons come in, state and history come out. Nothing here knows
//! about terminals or colors.

mod button;
mod history;
mod operation;
mod state;

pub use button::{Button, Digit};
pub use history::{History, HistoryEntry};
pub use operation::{CalcError, Operation};
pub use state::{CalculatorState, Entry, number_to_string, parse_number};
