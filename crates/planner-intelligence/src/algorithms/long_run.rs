// ABOUTME: Progressive long-run pacing that moves from 20% to 10% slower than marathon pace
// ABOUTME: Produces one target range per mile or kilometer of the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::clock::{format_clock, parse_clock};
use super::percentage::percentage_of_pace;
use planner_core::constants::limits::LONG_RUN_MAX_DISTANCE;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::{LongRunSplit, PaceUnit};

/// Pace fraction for the first split (20% slower)
const START_FRACTION: f64 = 0.8;

/// Pace fraction the run progresses toward (10% slower)
const FINISH_FRACTION: f64 = 0.9;

/// Half-width of each target range in seconds
const TARGET_SPREAD_SECONDS: f64 = 2.0;

/// Pfitzinger-style long run splits
///
/// The starting pace is `marathon_pace` slowed by 20% and the end point is
/// slowed by 10%. Each split speeds up by the same whole number of seconds,
/// and the target is a ±2 s range around that split's pace.
///
/// # Errors
///
/// Returns an error if the pace does not parse, the distance is not in
/// `1..=50`, or the pace is too fast to produce non-negative targets
pub fn long_run_splits(
    distance: u32,
    marathon_pace: &str,
    unit: PaceUnit,
) -> AppResult<Vec<LongRunSplit>> {
    if distance == 0 || distance > LONG_RUN_MAX_DISTANCE {
        return Err(AppError::out_of_range(format!(
            "Long run distance must be between 1 and {LONG_RUN_MAX_DISTANCE}, got {distance}"
        )));
    }

    let pace = parse_clock(marathon_pace)?;
    let mut current = percentage_of_pace(pace, START_FRACTION);
    let finish = percentage_of_pace(pace, FINISH_FRACTION);
    let step = ((current - finish) / f64::from(distance)).floor();

    if current - step * f64::from(distance) - TARGET_SPREAD_SECONDS < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Marathon pace '{marathon_pace}' is too fast for long run targets"
        )));
    }

    let splits = (1..=distance)
        .map(|split| {
            current -= step;
            LongRunSplit {
                split,
                unit,
                target_low: format_clock(current - TARGET_SPREAD_SECONDS),
                target_high: format_clock(current + TARGET_SPREAD_SECONDS),
            }
        })
        .collect();

    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_miles_at_six_minute_pace() {
        let splits = long_run_splits(15, "6:00", PaceUnit::Mile).unwrap();
        assert_eq!(splits.len(), 15);
        assert_eq!(splits[0].split, 1);
        assert_eq!(splits[0].target_pace(), "7:08 to 7:12");
        // 432 - 15 * 2 = 402
        assert_eq!(splits[14].target_pace(), "6:40 to 6:44");
    }

    #[test]
    fn test_splits_carry_unit() {
        let splits = long_run_splits(3, "4:30", PaceUnit::Kilometer).unwrap();
        assert!(splits.iter().all(|s| s.unit == PaceUnit::Kilometer));
        assert_eq!(splits.last().map(|s| s.split), Some(3));
    }

    #[test]
    fn test_zero_step_holds_pace() {
        // 6:30 -> 468 and 429, step = floor(39 / 40) = 0
        let splits = long_run_splits(40, "6:30", PaceUnit::Mile).unwrap();
        assert!(splits.iter().all(|s| s.target_pace() == "7:46 to 7:50"));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(long_run_splits(0, "6:30", PaceUnit::Mile).is_err());
        assert!(long_run_splits(51, "6:30", PaceUnit::Mile).is_err());
        assert!(long_run_splits(15, "6", PaceUnit::Mile).is_err());
        assert!(long_run_splits(1, "0:01", PaceUnit::Mile).is_err());
    }
}
