//! The input state machine.
//!
//! [`apply`] takes a state and a button and returns the next state, plus
//! whatever the press produced: a history entry, a fault, or nothing.
//! [`Calculator`] wraps that into a session that owns the history log.
//!
//! A few behaviors look like bugs and are kept deliberately:
//!
//! - `.` can be typed more than once (`2.5.5`); the entry then counts as zero.
//! - `-/+` replaces the entry with a bare `-` instead of negating it.
//! - `=` never combines with the left operand on its own. It only resolves
//!   whichever operator is pending.
//! - Dividing by zero resets the whole state, so the display goes blank.
//!   The fault is reported to the caller, which decides how to show it.

use std::mem;

use tracing::{debug, info, warn};

use crate::display;
use crate::model::{
    Button, CalcError, CalculatorState, Entry, History, HistoryEntry, Operation,
    number_to_string, parse_number,
};

/// What a single button press produced besides the new state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing beyond the state change.
    None,

    /// A calculation completed and should be appended to history.
    Recorded(HistoryEntry),

    /// A calculation failed. The state has already been reset to rest.
    Fault(CalcError),
}

/// Applies one button press to `state`.
pub fn apply(mut state: CalculatorState, button: Button) -> (CalculatorState, Effect) {
    let effect = match button {
        Button::Digit(digit) => {
            let text = match &state.entry {
                Entry::Typed(text) if text != "0" => format!("{text}{}", digit.as_char()),
                _ => digit.as_char().to_string(),
            };
            set_entry(&mut state, text);
            Effect::None
        }
        Button::Decimal => {
            let text = match &state.entry {
                Entry::Rest => "0.".to_string(),
                Entry::Typed(text) => format!("{text}."),
            };
            set_entry(&mut state, text);
            Effect::None
        }
        Button::SignToggle => {
            set_entry(&mut state, "-".to_string());
            Effect::None
        }
        Button::Percent => {
            let value = state.entry.value() / 100.0;
            state.display = number_to_string(value);
            state.left = Some(value);
            state.entry = Entry::Rest;
            Effect::None
        }
        Button::Clear => {
            state = CalculatorState::rest();
            Effect::None
        }
        Button::Add | Button::Subtract | Button::Multiply | Button::Divide | Button::Equals => {
            return press_operator(state, button);
        }
    };
    (state, effect)
}

fn set_entry(state: &mut CalculatorState, text: String) {
    state.display.clone_from(&text);
    state.entry = Entry::Typed(text);
}

fn press_operator(mut state: CalculatorState, button: Button) -> (CalculatorState, Effect) {
    let mut effect = Effect::None;

    if !state.pending.is_none() && !state.entry.is_rest() {
        effect = resolve_pending(&mut state);
    }

    if let Some(operation) = button.operation()
        && operation != Operation::Equals
    {
        state.pending = operation;
        state.symbol = button.label().to_string();
    }

    // Commit whatever was typed (or just computed) as the next left operand.
    if let Entry::Typed(text) = mem::take(&mut state.entry) {
        state.left = Some(parse_number(&text));
        state.display = text;
    }

    (state, effect)
}

/// Resolves the pending operation with the entry as the right operand.
fn resolve_pending(state: &mut CalculatorState) -> Effect {
    let left = state.left.unwrap_or(0.0);
    let right = state.entry.value();
    state.right = right;

    match state.pending.resolve(left, right) {
        Ok(Some(value)) => {
            let result = number_to_string(value);
            let entry = HistoryEntry::new(left, state.symbol.as_str(), right, result.as_str());
            state.entry = Entry::Typed(result);
            state.pending = Operation::None;
            Effect::Recorded(entry)
        }
        Ok(None) => {
            state.pending = Operation::None;
            Effect::None
        }
        Err(e) => {
            *state = CalculatorState::rest();
            Effect::Fault(e)
        }
    }
}

/// A calculator session: the current state and the history log.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    history: History,
}

impl Calculator {
    /// Starts a session at rest with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one button press into the session and returns the raw display.
    ///
    /// On a fault the state has already been reset to rest when the error
    /// comes back; the error only tells the caller why.
    pub fn screen_tap(&mut self, button: Button) -> Result<&str, CalcError> {
        debug!(%button, "tap");
        let (next, effect) = apply(mem::take(&mut self.state), button);
        self.state = next;

        match effect {
            Effect::None => {}
            Effect::Recorded(entry) => {
                info!(
                    left = entry.left(),
                    symbol = entry.symbol(),
                    right = entry.right(),
                    result = entry.result(),
                    "calculation recorded"
                );
                self.history.push(entry);
            }
            Effect::Fault(e) => {
                warn!(error = %e, "calculation failed, state reset");
                return Err(e);
            }
        }

        Ok(&self.state.display)
    }

    /// Empties the history log. Calculator state is untouched.
    pub fn clear_history(&mut self) {
        info!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The raw display string, before formatting.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// The display string as the display panel shows it.
    pub fn rendered(&self) -> String {
        display::render(&self.state.display)
    }
}
