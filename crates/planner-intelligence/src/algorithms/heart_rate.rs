// ABOUTME: Five heart rate training zones as fractions of maximum heart rate
// ABOUTME: Zone bounds round half to even, matching the rest of the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use planner_core::errors::{AppError, AppResult};
use planner_core::models::HeartRateZones;

/// Zone number and its `(low, high)` fraction of max heart rate
///
/// | zone | intensity  | purpose                           |
/// |------|------------|-----------------------------------|
/// | 1    | very light | recovery, warm-up, cool-down      |
/// | 2    | light      | endurance base                    |
/// | 3    | moderate   | aerobic capacity                  |
/// | 4    | hard       | threshold and speed               |
/// | 5    | maximum    | peak anaerobic effort             |
pub const ZONE_FRACTIONS: [(u8, f64, f64); 5] = [
    (1, 0.50, 0.60),
    (2, 0.65, 0.75),
    (3, 0.83, 0.87),
    (4, 0.89, 0.94),
    (5, 0.95, 0.98),
];

fn bpm(max_heart_rate: u32, fraction: f64) -> u32 {
    (f64::from(max_heart_rate) * fraction).round_ties_even() as u32
}

/// Heart rate zones for a maximum heart rate
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `max_heart_rate` is zero
pub fn heart_rate_zones(max_heart_rate: u32) -> AppResult<HeartRateZones> {
    if max_heart_rate == 0 {
        return Err(AppError::invalid_input("Maximum heart rate must be positive"));
    }

    Ok(ZONE_FRACTIONS
        .iter()
        .map(|&(zone, low, high)| (zone, (bpm(max_heart_rate, low), bpm(max_heart_rate, high))))
        .collect())
}
