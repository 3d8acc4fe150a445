// ABOUTME: Percentage-of-pace and percentage-of-speed adjustments and the workout pace table
// ABOUTME: Results are rounded to whole seconds with ties going to the even second
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Percentage adjustments
//!
//! Two ways of scaling a goal pace are supported:
//!
//! - **pace**: each percent changes the pace (min/unit) by the same amount,
//!   `p × (1 + (1 − pct))`
//! - **speed**: each percent changes the speed (m/s) by the same amount,
//!   `p / pct`
//!
//! Both round to whole seconds. See
//! <https://runningwritings.com/2013/02/brief-thoughts-calculating-percentages.html>.

use super::clock::{format_clock, parse_clock};
use planner_core::errors::{AppError, AppResult};
use planner_core::models::{PercentageMethod, WorkoutPace};

/// Largest percentage accepted; beyond it a pace-based adjustment goes negative
pub const MAX_PERCENTAGE: u32 = 200;

/// Rows of the workout table: percentage of goal pace and its designation
pub const WORKOUT_DESIGNATIONS: [(u32, &str); 8] = [
    (80, "Basic Endurance"),
    (85, "General Endurance"),
    (90, "Race-supportive Endurance"),
    (95, "Race-specific Endurance"),
    (100, "Race Pace"),
    (105, "Race-specific Speed"),
    (110, "Race-supportive Speed"),
    (115, "General Speed"),
];

/// Scale a pace so every percent moves the pace by a constant amount
#[must_use]
pub fn percentage_of_pace(pace_seconds: f64, fraction: f64) -> f64 {
    (pace_seconds * (1.0 + (1.0 - fraction))).round_ties_even()
}

/// Scale a pace so every percent moves the speed by a constant amount
///
/// `fraction` must be non-zero; [`adjust_pace`] guarantees that.
#[must_use]
pub fn percentage_of_speed(pace_seconds: f64, fraction: f64) -> f64 {
    (pace_seconds / fraction).round_ties_even()
}

/// Apply a whole-number percentage to a pace in seconds
///
/// # Errors
///
/// Returns `AppError::ValueOutOfRange` unless `1 <= percentage <= 200`
pub fn adjust_pace(pace_seconds: f64, method: PercentageMethod, percentage: u32) -> AppResult<f64> {
    if percentage == 0 || percentage > MAX_PERCENTAGE {
        return Err(AppError::out_of_range(format!(
            "Percentage must be between 1 and {MAX_PERCENTAGE}, got {percentage}"
        )));
    }

    let fraction = f64::from(percentage) * 0.01;
    Ok(match method {
        PercentageMethod::Pace => percentage_of_pace(pace_seconds, fraction),
        PercentageMethod::Speed => percentage_of_speed(pace_seconds, fraction),
    })
}

/// Formatted pace after applying a percentage
///
/// # Errors
///
/// Returns an error if the pace does not parse or the percentage is out of range
pub fn pace_percentage(pace: &str, method: PercentageMethod, percentage: u32) -> AppResult<String> {
    let seconds = parse_clock(pace)?;
    Ok(format_clock(adjust_pace(seconds, method, percentage)?))
}

/// Workout pace table for a goal pace
///
/// One row per entry in [`WORKOUT_DESIGNATIONS`], in ascending percentage.
///
/// # Errors
///
/// Returns an error if the pace does not parse
pub fn workout_paces(pace: &str, method: PercentageMethod) -> AppResult<Vec<WorkoutPace>> {
    let seconds = parse_clock(pace)?;

    WORKOUT_DESIGNATIONS
        .iter()
        .map(|&(percentage, designation)| {
            let adjusted = adjust_pace(seconds, method, percentage)?;
            Ok(WorkoutPace {
                percentage,
                designation: designation.to_owned(),
                pace: format_clock(adjusted),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_adjustments() {
        assert!((percentage_of_pace(600.0, 0.95) - 630.0).abs() < f64::EPSILON);
        assert!((percentage_of_speed(600.0, 0.95) - 632.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pace_percentage_formats() {
        assert_eq!(pace_percentage("6:00", PercentageMethod::Pace, 95).unwrap(), "6:18");
        assert_eq!(pace_percentage("6:00", PercentageMethod::Speed, 95).unwrap(), "6:19");
        assert_eq!(pace_percentage("6:00", PercentageMethod::Pace, 100).unwrap(), "6:00");
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(adjust_pace(360.0, PercentageMethod::Speed, 0).is_err());
        assert!(adjust_pace(360.0, PercentageMethod::Pace, 201).is_err());
        assert!(adjust_pace(360.0, PercentageMethod::Pace, 200).is_ok());
    }

    #[test]
    fn test_workout_table_by_pace() {
        let rows = workout_paces("6:00", PercentageMethod::Pace).unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].percentage, 80);
        assert_eq!(rows[0].designation, "Basic Endurance");
        assert_eq!(rows[0].pace, "7:12");
        assert_eq!(rows[4].pace, "6:00");
        assert_eq!(rows[7].designation, "General Speed");
        assert_eq!(rows[7].pace, "5:06");
    }

    #[test]
    fn test_workout_table_by_speed() {
        let rows = workout_paces("6:00", PercentageMethod::Speed).unwrap();
        // 360 / 0.8 = 450
        assert_eq!(rows[0].pace, "7:30");
        // 360 / 1.15 = 313.04
        assert_eq!(rows[7].pace, "5:13");
    }

    #[test]
    fn test_workout_table_rejects_bad_pace() {
        assert!(workout_paces("6", PercentageMethod::Pace).is_err());
    }
}
