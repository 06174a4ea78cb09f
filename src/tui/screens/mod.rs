//! Screen rendering and input handling.

mod history;
mod keypad;

pub use history::HistoryScreen;
pub use keypad::KeypadScreen;
