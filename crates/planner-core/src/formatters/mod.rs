// ABOUTME: Keystroke masks for the time, pace, and percentage input fields
// ABOUTME: Strips non-digits and inserts colons at offsets fixed by the digit count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Input masks
//!
//! These are display masks, not parsers. `mask_time_input` never checks that
//! minutes or seconds are below 60; `"99:99:99"` is a perfectly good mask
//! result. Semantic validation happens when the service parses the clock
//! string.

/// Maximum number of digits a time mask keeps (`HH:MM:SS`)
pub const MAX_TIME_DIGITS: usize = 6;

/// Maximum length of a masked time string
pub const MAX_TIME_LEN: usize = 8;

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Mask raw keystrokes into a clock string
///
/// Every non-digit is dropped first, then colons are inserted according to
/// how many digits remain:
///
/// | digits | result     |
/// |--------|------------|
/// | 0-2    | `DD`       |
/// | 3      | `D:DD`     |
/// | 4      | `DD:DD`    |
/// | 5      | `D:DD:DD`  |
/// | 6+     | `DD:DD:DD` (extra digits dropped) |
///
/// # Examples
///
/// ```
/// use planner_core::formatters::mask_time_input;
///
/// assert_eq!(mask_time_input("123"), "1:23");
/// assert_eq!(mask_time_input("3:0000"), "3:00:00");
/// ```
#[must_use]
pub fn mask_time_input(raw: &str) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(MAX_TIME_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3 => format!("{}:{}", &digits[..1], &digits[1..]),
        4 => format!("{}:{}", &digits[..2], &digits[2..]),
        5 => format!("{}:{}:{}", &digits[..1], &digits[1..3], &digits[3..]),
        _ => format!("{}:{}:{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Strip everything but digits from a percentage field
///
/// No clamping is applied: `"150%"` becomes `"150"`.
#[must_use]
pub fn sanitize_percentage(raw: &str) -> String {
    digits_only(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_inputs_have_no_colon() {
        assert_eq!(mask_time_input(""), "");
        assert_eq!(mask_time_input("1"), "1");
        assert_eq!(mask_time_input("12"), "12");
    }

    #[test]
    fn test_mask_inserts_colons_by_digit_count() {
        assert_eq!(mask_time_input("123"), "1:23");
        assert_eq!(mask_time_input("1234"), "12:34");
        assert_eq!(mask_time_input("12345"), "1:23:45");
        assert_eq!(mask_time_input("123456"), "12:34:56");
    }

    #[test]
    fn test_mask_strips_non_digits_first() {
        assert_eq!(mask_time_input("abc123"), "1:23");
        assert_eq!(mask_time_input("1:2:3:4"), "12:34");
        assert_eq!(mask_time_input("--"), "");
    }

    #[test]
    fn test_mask_truncates_to_six_digits() {
        assert_eq!(mask_time_input("12345678"), "12:34:56");
        assert!(mask_time_input("9999999999").len() <= MAX_TIME_LEN);
    }

    #[test]
    fn test_mask_accepts_out_of_range_values() {
        assert_eq!(mask_time_input("999999"), "99:99:99");
    }

    #[test]
    fn test_mask_is_keystroke_incremental() {
        // Typing one digit at a time into the previous masked value
        let mut field = String::new();
        for key in "30000".chars() {
            field.push(key);
            field = mask_time_input(&field);
        }
        assert_eq!(field, "3:00:00");
    }

    #[test]
    fn test_mask_reapplied_to_own_output_keeps_digits() {
        let once = mask_time_input("1234567");
        assert_eq!(once, "12:34:56");
        assert_eq!(mask_time_input(&once), once);
    }

    #[test]
    fn test_sanitize_percentage() {
        assert_eq!(sanitize_percentage("95"), "95");
        assert_eq!(sanitize_percentage("9a5%"), "95");
        assert_eq!(sanitize_percentage("150"), "150");
        assert_eq!(sanitize_percentage(""), "");
    }
}
