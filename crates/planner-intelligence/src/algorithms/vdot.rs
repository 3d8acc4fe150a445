// ABOUTME: VDOT score from a race result and the training paces derived from it
// ABOUTME: Uses the Daniels/Gilbert oxygen cost and drop-dead curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! VDOT
//!
//! The oxygen cost of running at velocity `v` (m/min) is
//!
//! ```text
//! VO2 = -4.60 + 0.182258·v + 0.000104·v²
//! ```
//!
//! and the fraction of VO2max sustainable for `t` minutes is
//!
//! ```text
//! %max = 0.8 + 0.1894393·e^(-0.012778·t) + 0.2989558·e^(-0.1932605·t)
//! ```
//!
//! VDOT is their ratio. Training paces invert the cost equation at a fixed
//! fraction of VDOT for each intensity.
//!
//! # References
//!
//! - Daniels, J. & Gilbert, J. (1979). *Oxygen Power*.
//! - <https://github.com/tlgs/vdot>

use super::clock::{format_clock, parse_clock, round_micros};
use super::pace::convert_pace_seconds;
use planner_core::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use planner_core::errors::{AppError, AppResult};
use planner_core::models::{PaceUnit, TrainingPaces};
use tracing::debug;

/// Oxygen cost constant term
const DANIELS_C: f64 = -4.60;

/// Oxygen cost coefficient for velocity
const DANIELS_B: f64 = 0.182_258;

/// Oxygen cost coefficient for velocity squared
const DANIELS_A: f64 = 0.000_104;

/// `DANIELS_B²` as published, rounded to six places
const DANIELS_B_SQUARED: f64 = 0.033_218;

/// Training intensities and their fraction of VDOT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingIntensity {
    /// Slow end of easy running
    EasyLower,
    /// Fast end of easy running
    EasyUpper,
    /// Marathon pace
    Marathon,
    /// Lactate threshold
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short fast repetitions
    Repetitions,
}

impl TrainingIntensity {
    /// All intensities, slowest first
    pub const ALL: [Self; 6] = [
        Self::EasyLower,
        Self::EasyUpper,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetitions,
    ];

    /// Fraction of VDOT run at this intensity
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::EasyLower => 0.6304,
            Self::EasyUpper => 0.7346,
            Self::Marathon => 0.8251,
            Self::Threshold => 0.8799,
            Self::Interval => 0.9743,
            Self::Repetitions => 1.089,
        }
    }

    /// Display name used as the response key
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EasyLower => "Easy (lower)",
            Self::EasyUpper => "Easy (upper)",
            Self::Marathon => "Marathon",
            Self::Threshold => "Threshold",
            Self::Interval => "Interval",
            Self::Repetitions => "Repetitions",
        }
    }
}

/// VDOT for a race of `distance_meters` run in `time_seconds`
///
/// Rounded to one decimal.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if either argument is not positive
pub fn calculate_vdot(distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
    if !time_seconds.is_finite() || time_seconds <= 0.0 {
        return Err(AppError::invalid_input("Time must be positive"));
    }
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(AppError::invalid_input("Distance must be positive"));
    }

    let minutes = time_seconds / SECONDS_PER_MINUTE;
    let velocity = distance_meters / minutes;
    let vo2 = DANIELS_A.mul_add(velocity * velocity, DANIELS_B.mul_add(velocity, DANIELS_C));
    let percent_max = 0.298_955_8f64.mul_add(
        (-0.193_260_5 * minutes).exp(),
        0.189_439_3f64.mul_add((-0.012_778 * minutes).exp(), 0.8),
    );

    let vdot = (vo2 / percent_max * 10.0).round_ties_even() / 10.0;
    debug!(distance_meters, time_seconds, vdot, "Calculated VDOT");
    Ok(vdot)
}

/// VDOT for a race result given as a clock string
///
/// # Errors
///
/// Returns an error if the time does not parse or either value is not positive
pub fn vdot_from_race(distance_meters: f64, time: &str) -> AppResult<f64> {
    calculate_vdot(distance_meters, parse_clock(time)?)
}

/// Velocity in m/min at which running costs `vdot × fraction`
#[must_use]
pub fn velocity_at(vdot: f64, fraction: f64) -> f64 {
    let discriminant = (4.0 * DANIELS_A).mul_add(vdot.mul_add(fraction, -DANIELS_C), DANIELS_B_SQUARED);
    (-DANIELS_B + discriminant.sqrt()) / (2.0 * DANIELS_A)
}

/// Seconds per kilometer at a training intensity
#[must_use]
pub fn pace_per_km(vdot: f64, intensity: TrainingIntensity) -> f64 {
    let minutes_per_km = METERS_PER_KM / velocity_at(vdot, intensity.fraction());
    round_micros(minutes_per_km * SECONDS_PER_MINUTE)
}

/// Training paces for a VDOT, formatted per `unit`
///
/// Mile paces are derived from the already formatted kilometer pace, so they
/// agree with what a runner would get converting the kilometer table by hand.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `vdot` is not positive
pub fn training_paces(vdot: f64, unit: PaceUnit) -> AppResult<TrainingPaces> {
    if !vdot.is_finite() || vdot <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "VDOT must be positive, got {vdot}"
        )));
    }

    let format = |intensity: TrainingIntensity| -> AppResult<String> {
        let km = format_clock(pace_per_km(vdot, intensity));
        match unit {
            PaceUnit::Kilometer => Ok(km),
            PaceUnit::Mile => {
                let seconds = parse_clock(&km)?;
                Ok(format_clock(convert_pace_seconds(seconds, PaceUnit::Mile)))
            }
        }
    };

    Ok(TrainingPaces {
        easy_lower: format(TrainingIntensity::EasyLower)?,
        easy_upper: format(TrainingIntensity::EasyUpper)?,
        marathon: format(TrainingIntensity::Marathon)?,
        threshold: format(TrainingIntensity::Threshold)?,
        interval: format(TrainingIntensity::Interval)?,
        repetitions: format(TrainingIntensity::Repetitions)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_k_in_twenty_minutes() {
        assert!((calculate_vdot(5000.0, 1200.0).unwrap() - 49.8).abs() < 1e-9);
        assert!((vdot_from_race(5000.0, "20:00").unwrap() - 49.8).abs() < 1e-9);
    }

    #[test]
    fn test_vdot_rejects_non_positive_inputs() {
        assert!(calculate_vdot(5000.0, 0.0).is_err());
        assert!(calculate_vdot(0.0, 1200.0).is_err());
        assert!(vdot_from_race(5000.0, "0:00").is_err());
    }

    #[test]
    fn test_velocity_inverts_oxygen_cost() {
        let velocity = velocity_at(50.0, 0.8);
        let cost = DANIELS_A.mul_add(velocity * velocity, DANIELS_B.mul_add(velocity, DANIELS_C));
        assert!((cost - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_training_paces_get_faster_with_intensity() {
        let paces: Vec<f64> = TrainingIntensity::ALL
            .iter()
            .map(|intensity| pace_per_km(50.0, *intensity))
            .collect();
        assert!(paces.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_mile_paces_are_slower_than_km() {
        let km = training_paces(50.0, PaceUnit::Kilometer).unwrap();
        let mi = training_paces(50.0, PaceUnit::Mile).unwrap();
        for ((name, km_pace), (_, mi_pace)) in km.entries().iter().zip(mi.entries().iter()) {
            let km_seconds = parse_clock(km_pace).unwrap();
            let mi_seconds = parse_clock(mi_pace).unwrap();
            assert!(mi_seconds > km_seconds, "{name}: {mi_pace} vs {km_pace}");
        }
    }

    #[test]
    fn test_training_paces_reject_bad_vdot() {
        assert!(training_paces(0.0, PaceUnit::Mile).is_err());
        assert!(training_paces(f64::NAN, PaceUnit::Kilometer).is_err());
    }
}
