//! Key colors. Buttons know nothing about how they are drawn.

use ratatui::style::Color;

use crate::model::Button;

/// Operator keys: `+ - x ÷ =`.
pub const OPERATOR: Color = Color::Blue;

/// Function keys: `AC -/+ %`.
pub const FUNCTION: Color = Color::Rgb(116, 186, 255);

/// Digits and the decimal point.
pub const NUMBER: Color = Color::Rgb(55, 55, 55);

/// Background for a key.
pub fn key_color(button: Button) -> Color {
    match button {
        Button::Add | Button::Subtract | Button::Multiply | Button::Divide | Button::Equals => {
            OPERATOR
        }
        Button::Clear | Button::SignToggle | Button::Percent => FUNCTION,
        Button::Digit(_) | Button::Decimal => NUMBER,
    }
}

/// Label color for a key, chosen for contrast with [`key_color`].
pub fn label_color(button: Button) -> Color {
    if key_color(button) == FUNCTION {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Digit;

    #[test]
    fn keys_group_by_role() {
        assert_eq!(key_color(Button::Divide), OPERATOR);
        assert_eq!(key_color(Button::Equals), OPERATOR);
        assert_eq!(key_color(Button::Percent), FUNCTION);
        assert_eq!(key_color(Button::Clear), FUNCTION);
        assert_eq!(key_color(Button::Digit(Digit::ALL[3])), NUMBER);
        assert_eq!(key_color(Button::Decimal), NUMBER);
    }

    #[test]
    fn function_keys_get_dark_labels() {
        assert_eq!(label_color(Button::SignToggle), Color::Black);
        assert_eq!(label_color(Button::Add), Color::White);
    }
}
