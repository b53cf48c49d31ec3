//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bounds::LengthBounds;

// A plain decimal number: optional sign, digits, optional fraction
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("numeric pattern is valid")
});

/// Validates a phone number.
///
/// The value must read as a number in its entirety; surrounding whitespace is
/// tolerated but letters and other symbols are not.
pub fn is_valid_phone(value: &str, bounds: LengthBounds) -> bool {
    if value.is_empty() || !is_numeric(value) {
        return false;
    }

    bounds.contains(value)
}

/// Whether `value` parses entirely as a decimal number.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value.trim())
}
