//! Pending binary operations and their resolution.

use serde::{Deserialize, Serialize};

/// Errors raised while resolving an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

/// The binary operator waiting for its right operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    #[default]
    None,
}

impl Operation {
    /// Combines `left` and `right` under this operation.
    ///
    /// `Equals` echoes the right operand and ignores `left`.
    /// `None` resolves to nothing.
    #[allow(clippy::float_cmp)] // Only an exact zero divisor is an error.
    pub fn resolve(self, left: f64, right: f64) -> Result<Option<f64>, CalcError> {
        let value = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                left / right
            }
            Self::Equals => right,
            Self::None => return Ok(None),
        };
        Ok(Some(value))
    }

    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
