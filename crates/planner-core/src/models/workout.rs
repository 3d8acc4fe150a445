// ABOUTME: Saved workout records accepted and returned by the workout store endpoints
// ABOUTME: Column limits are enforced here so the HTTP layer and the store agree on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::constants::limits::{
    WORKOUT_DISTANCE_MAX, WORKOUT_NAME_MAX_LEN, WORKOUT_PACE_MAX_LEN, WORKOUT_TIME_MAX_LEN,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Request body for `POST /create_workout`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutCreate {
    /// Workout name (1 to 100 characters)
    pub name: String,
    /// Target pace, `MM:SS`
    #[serde(default)]
    pub pace: Option<String>,
    /// Target distance
    #[serde(default)]
    pub distance: Option<f64>,
    /// Target duration, `HH:MM:SS`
    #[serde(default)]
    pub time: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutCreate {
    /// Check column limits
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        let name_len = self.name.chars().count();
        if name_len == 0 {
            return Err(AppError::missing_field("name"));
        }
        if name_len > WORKOUT_NAME_MAX_LEN {
            return Err(AppError::invalid_input(format!(
                "Workout name must be at most {WORKOUT_NAME_MAX_LEN} characters"
            )));
        }

        check_len("pace", self.pace.as_deref(), WORKOUT_PACE_MAX_LEN)?;
        check_len("time", self.time.as_deref(), WORKOUT_TIME_MAX_LEN)?;

        if let Some(distance) = self.distance {
            if !distance.is_finite() || !(0.0..WORKOUT_DISTANCE_MAX).contains(&distance) {
                return Err(AppError::out_of_range(format!(
                    "Workout distance must be in [0, {WORKOUT_DISTANCE_MAX}), got {distance}"
                )));
            }
        }

        Ok(())
    }

    /// Distance rounded to the two decimals the store keeps
    #[must_use]
    pub fn stored_distance(&self) -> Option<f64> {
        self.distance.map(|d| (d * 100.0).round() / 100.0)
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::invalid_input(format!(
            "Workout {field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// A workout as stored and returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Store-assigned identifier
    pub id: i64,
    /// Workout name
    pub name: String,
    /// Target pace
    pub pace: Option<String>,
    /// Target distance
    pub distance: Option<f64>,
    /// Target duration
    pub time: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> WorkoutCreate {
        WorkoutCreate {
            name: name.to_owned(),
            ..WorkoutCreate::default()
        }
    }

    #[test]
    fn test_name_bounds() {
        assert!(named("Tempo").validate().is_ok());
        assert!(named("").validate().is_err());
        assert!(named(&"x".repeat(100)).validate().is_ok());
        assert!(named(&"x".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_optional_field_limits() {
        let mut workout = named("Intervals");
        workout.pace = Some("6:30".to_owned());
        workout.time = Some("1:00:00".to_owned());
        assert!(workout.validate().is_ok());

        workout.pace = Some("06:30x".to_owned());
        assert!(workout.validate().is_err());
    }

    #[test]
    fn test_distance_range_and_rounding() {
        let mut workout = named("Long run");
        workout.distance = Some(18.456);
        assert!(workout.validate().is_ok());
        assert_eq!(workout.stored_distance(), Some(18.46));

        workout.distance = Some(100.0);
        assert!(workout.validate().is_err());
        workout.distance = Some(-1.0);
        assert!(workout.validate().is_err());
    }

    #[test]
    fn test_create_body_accepts_missing_optionals() {
        let body: WorkoutCreate = serde_json::from_str(r#"{"name":"Easy"}"#).unwrap();
        assert_eq!(body, named("Easy"));
    }
}
