// ABOUTME: Race pace, finish time, and pace unit conversion
// ABOUTME: Distances arrive in meters and are expressed in the pace unit before dividing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::clock::{format_clock, parse_clock, round_micros};
use planner_core::constants::units::{KM_PER_MILE, MILES_PER_KM};
use planner_core::errors::{AppError, AppResult};
use planner_core::models::PaceUnit;

fn distance_in_unit(distance_meters: f64, unit: PaceUnit) -> AppResult<f64> {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be a positive number of meters, got {distance_meters}"
        )));
    }
    Ok(unit.from_meters(distance_meters))
}

/// Pace in seconds per unit for a finish time over a distance
#[must_use]
pub fn pace_seconds(time_seconds: f64, distance_in_unit: f64) -> f64 {
    round_micros(time_seconds / distance_in_unit)
}

/// Finish time in seconds for a pace held over a distance
#[must_use]
pub fn time_seconds(pace_seconds: f64, distance_in_unit: f64) -> f64 {
    round_micros(pace_seconds * distance_in_unit)
}

/// Formatted pace per `unit` for a finish time over `distance_meters`
///
/// # Errors
///
/// Returns an error if the time does not parse or the distance is not positive
pub fn race_pace(finish_time: &str, unit: PaceUnit, distance_meters: f64) -> AppResult<String> {
    let time = parse_clock(finish_time)?;
    let distance = distance_in_unit(distance_meters, unit)?;
    Ok(format_clock(pace_seconds(time, distance)))
}

/// Formatted finish time for a pace per `unit` over `distance_meters`
///
/// # Errors
///
/// Returns an error if the pace does not parse or the distance is not positive
pub fn race_time(pace: &str, unit: PaceUnit, distance_meters: f64) -> AppResult<String> {
    let pace = parse_clock(pace)?;
    let distance = distance_in_unit(distance_meters, unit)?;
    Ok(format_clock(time_seconds(pace, distance)))
}

/// Convert a pace in seconds to the other unit
///
/// The input is taken to be per the opposite of `target`.
#[must_use]
pub fn convert_pace_seconds(pace_seconds: f64, target: PaceUnit) -> f64 {
    match target {
        PaceUnit::Mile => round_micros(pace_seconds / MILES_PER_KM),
        PaceUnit::Kilometer => round_micros(pace_seconds / KM_PER_MILE),
    }
}

/// Convert a formatted pace into `target` units
///
/// # Errors
///
/// Returns an error if the pace does not parse
pub fn convert_pace(pace: &str, target: PaceUnit) -> AppResult<String> {
    let seconds = parse_clock(pace)?;
    Ok(format_clock(convert_pace_seconds(seconds, target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_k_pace_in_both_units() {
        assert_eq!(race_pace("20:00", PaceUnit::Kilometer, 5000.0).unwrap(), "4:00");
        // 5000 m is 3.105 mi
        assert_eq!(race_pace("20:00", PaceUnit::Mile, 5000.0).unwrap(), "6:26");
    }

    #[test]
    fn test_marathon_time_from_pace() {
        assert_eq!(race_time("5:00", PaceUnit::Kilometer, 42195.0).unwrap(), "3:30:58");
        assert_eq!(race_time("6:30", PaceUnit::Mile, 5000.0).unwrap(), "20:10");
    }

    #[test]
    fn test_rejects_bad_distance() {
        assert!(race_pace("20:00", PaceUnit::Mile, 0.0).is_err());
        assert!(race_time("6:30", PaceUnit::Mile, -5.0).is_err());
        assert!(race_pace("20:00", PaceUnit::Mile, f64::INFINITY).is_err());
    }

    #[test]
    fn test_convert_pace() {
        // 4:00/km -> 240 / 0.621 = 386.47 s/mi
        assert_eq!(convert_pace("4:00", PaceUnit::Mile).unwrap(), "6:26");
        // 6:26/mi -> 386 / 1.609 = 239.9 s/km
        assert_eq!(convert_pace("6:26", PaceUnit::Kilometer).unwrap(), "3:59");
    }
}
