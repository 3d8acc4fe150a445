// ABOUTME: Clock string parsing and formatting for race times and paces
// ABOUTME: Accepts H:MM:SS or M:SS and renders whole seconds without a leading zero hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use planner_core::constants::units::MICROS_PER_SECOND;
use planner_core::errors::{AppError, AppResult};

/// Largest hour value accepted in `H:MM:SS`
const MAX_HOURS: u32 = 23;

/// Largest minute or second value accepted in either form
const MAX_MINUTES_OR_SECONDS: u32 = 59;

const SECS_PER_MINUTE: u32 = 60;
const SECS_PER_HOUR: u32 = 3600;

/// Parse one clock field: one or two ASCII digits, at most `max`
fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|value| *value <= max)
}

/// Parse a clock string into seconds
///
/// Two shapes are accepted, tried in order:
///
/// - `H:MM:SS` with hours 0-23
/// - `M:SS` with minutes 0-59
///
/// Every field is one or two digits and seconds are 0-59. Leading zeros are
/// optional, so `"7:5"` is seven minutes and five seconds.
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` when the string matches neither shape.
pub fn parse_clock(raw: &str) -> AppResult<f64> {
    let fields: Vec<&str> = raw.split(':').collect();

    let seconds = match fields.as_slice() {
        [h, m, s] => parse_field(h, MAX_HOURS).and_then(|h| {
            let m = parse_field(m, MAX_MINUTES_OR_SECONDS)?;
            let s = parse_field(s, MAX_MINUTES_OR_SECONDS)?;
            Some(h * SECS_PER_HOUR + m * SECS_PER_MINUTE + s)
        }),
        [m, s] => parse_field(m, MAX_MINUTES_OR_SECONDS).and_then(|m| {
            let s = parse_field(s, MAX_MINUTES_OR_SECONDS)?;
            Some(m * SECS_PER_MINUTE + s)
        }),
        _ => None,
    };

    seconds.map(f64::from).ok_or_else(|| {
        AppError::invalid_format(format!(
            "Invalid time '{raw}': expected H:MM:SS or M:SS"
        ))
    })
}

/// Snap a duration to microsecond resolution
///
/// Durations produced by division and multiplication are held at microsecond
/// precision (ties to even) before being truncated for display, so a value
/// such as `386.9999999999` formats as `6:27` rather than `6:26`.
#[must_use]
pub fn round_micros(seconds: f64) -> f64 {
    (seconds * MICROS_PER_SECOND).round_ties_even() / MICROS_PER_SECOND
}

/// Format seconds as a clock string
///
/// Fractions are truncated to whole seconds. The result is `H:MM:SS` when the
/// duration reaches an hour and `M:SS` otherwise. Negative durations are
/// clamped to zero.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = round_micros(seconds).trunc().max(0.0) as u64;
    let hours = total / u64::from(SECS_PER_HOUR);
    let minutes = (total % u64::from(SECS_PER_HOUR)) / u64::from(SECS_PER_MINUTE);
    let secs = total % u64::from(SECS_PER_MINUTE);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_shapes() {
        assert!((parse_clock("24:35").unwrap() - 1475.0).abs() < f64::EPSILON);
        assert!((parse_clock("3:24:35").unwrap() - 12275.0).abs() < f64::EPSILON);
        assert!((parse_clock("7:5").unwrap() - 425.0).abs() < f64::EPSILON);
        assert!((parse_clock("0:00").unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_garbage() {
        for bad in ["", "20", "60:00", "24:00:00", "1:60", "1:2:3:4", "abc", "1:234", " 1:00", "-1:00"] {
            assert!(parse_clock(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn test_format_drops_zero_hour() {
        assert_eq!(format_clock(386.0), "6:26");
        assert_eq!(format_clock(5.0), "0:05");
        assert_eq!(format_clock(3700.0), "1:01:40");
        assert_eq!(format_clock(12275.0), "3:24:35");
    }

    #[test]
    fn test_format_truncates_fractions() {
        assert_eq!(format_clock(386.99), "6:26");
        assert_eq!(format_clock(386.999_999_9), "6:27");
    }

    #[test]
    fn test_format_clamps_negative() {
        assert_eq!(format_clock(-3.0), "0:00");
    }
}
