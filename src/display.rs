//! Display formatting: turns raw entry and result strings into what the
//! display panel shows, and picks a font size for them.
//!
//! Everything here is pure. Nothing touches calculator state.

use std::ops::Range;

/// Longest string the display shows before switching to scientific notation.
pub const DISPLAY_WIDTH: usize = 10;

/// Fractional digits kept in the scientific mantissa.
const SCIENTIFIC_PRECISION: usize = 5;

/// Font size used for any length outside [`FONT_SIZES`].
pub const DEFAULT_FONT_SIZE: u16 = 56;

/// Display length ranges and their font sizes, largest first.
pub const FONT_SIZES: &[(Range<usize>, u16)] = &[
    (0..7, 96),
    (7..8, 80),
    (8..9, 72),
    (9..10, 64),
    (10..11, 56),
];

/// Drops the fractional part of whole numbers: `"4.0"` becomes `"4"`.
///
/// Fractions and anything that doesn't parse come back unchanged.
#[allow(clippy::float_cmp)] // Whole means floor(x) == x exactly.
pub fn format_integers(text: &str) -> String {
    match text.trim().parse::<f64>() {
        Ok(value) if value.floor() == value => format!("{value:.0}"),
        _ => text.to_string(),
    }
}

/// Scientific notation with up to five fractional mantissa digits and a
/// lowercase exponent marker: `"123456789012"` becomes `"1.23457e11"`.
///
/// Returns an empty string when `text` doesn't parse.
pub fn format_scientific(text: &str) -> String {
    let Ok(value) = text.trim().parse::<f64>() else {
        return String::new();
    };

    let formatted = format!("{value:.prec$e}", prec = SCIENTIFIC_PRECISION);
    // Non-finite values have no exponent.
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{mantissa}e{exponent}")
}

/// Font size for a display of `len` characters.
pub fn font_size(len: usize) -> u16 {
    FONT_SIZES
        .iter()
        .find(|(range, _)| range.contains(&len))
        .map_or(DEFAULT_FONT_SIZE, |(_, size)| *size)
}

/// What the display panel shows for a raw display string.
pub fn render(raw: &str) -> String {
    if raw.chars().count() > DISPLAY_WIDTH {
        format_scientific(raw)
    } else {
        format_integers(raw).chars().take(DISPLAY_WIDTH).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_drop_trailing_zero_fraction() {
        assert_eq!(format_integers("4.0"), "4");
        assert_eq!(format_integers("4.5"), "4.5");
        assert_eq!(format_integers("-12.0"), "-12");
        assert_eq!(format_integers("7"), "7");
    }

    #[test]
    fn integers_leave_malformed_text_alone() {
        assert_eq!(format_integers(""), "");
        assert_eq!(format_integers("-"), "-");
        assert_eq!(format_integers("2.5.5"), "2.5.5");
    }

    #[test]
    fn scientific_uses_lowercase_exponent_and_five_digits() {
        let out = format_scientific("123456789012");
        assert_eq!(out, "1.23457e11");

        let (mantissa, _) = out.split_once('e').unwrap();
        let fraction = mantissa.split_once('.').map_or("", |(_, f)| f);
        assert!(fraction.len() <= 5);
    }

    #[test]
    fn scientific_trims_trailing_zeros() {
        assert_eq!(format_scientific("10000000000000000"), "1e16");
        assert_eq!(format_scientific("0.000000015"), "1.5e-8");
        assert_eq!(format_scientific("-25000000000"), "-2.5e10");
    }

    #[test]
    fn scientific_of_malformed_text_is_empty() {
        assert_eq!(format_scientific("2.5.5.5.5.5"), "");
    }

    #[test]
    fn font_size_table() {
        assert_eq!(font_size(0), 96);
        assert_eq!(font_size(5), 96);
        assert_eq!(font_size(7), 80);
        assert_eq!(font_size(8), 72);
        assert_eq!(font_size(9), 64);
        assert_eq!(font_size(10), 56);
        assert_eq!(font_size(15), 56);
    }

    #[test]
    fn render_short_values() {
        assert_eq!(render("10.0"), "10");
        assert_eq!(render("0.07"), "0.07");
        assert_eq!(render(""), "");
        assert_eq!(render("-"), "-");
    }

    #[test]
    fn render_long_values_in_scientific() {
        assert_eq!(render("12345678901"), "1.23457e10");
        assert_eq!(render("0.3333333333333333"), "3.33333e-1");
    }

    #[test]
    fn render_truncates_to_display_width() {
        assert_eq!(render("123456789.0"), "1.23457e8");
        assert_eq!(render("1234567890"), "1234567890");
        assert_eq!(render("1e16"), "1000000000");
    }
}
