// ABOUTME: Query parameters and JSON responses for every pace service endpoint
// ABOUTME: Defaults mirror the service's documented fallbacks when a parameter is omitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::units::PaceUnit;
use crate::constants::defaults;
use crate::errors::AppError;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

fn default_finish_time() -> String {
    defaults::FINISH_TIME.to_owned()
}

fn default_race_pace() -> String {
    defaults::RACE_PACE.to_owned()
}

fn default_training_pace() -> String {
    defaults::TRAINING_PACE.to_owned()
}

const fn default_distance() -> f64 {
    defaults::DISTANCE_METERS
}

const fn default_percentage() -> u32 {
    defaults::PERCENTAGE
}

const fn default_long_run_distance() -> u32 {
    defaults::LONG_RUN_DISTANCE
}

const fn default_max_heart_rate() -> u32 {
    defaults::MAX_HEART_RATE
}

/// How a percentage is applied to a pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentageMethod {
    /// Linear change in pace (min/unit) per percent
    #[default]
    Pace,
    /// Linear change in speed (m/s) per percent
    Speed,
}

impl PercentageMethod {
    /// Wire code for this method
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Speed => "speed",
        }
    }
}

impl fmt::Display for PercentageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PercentageMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pace" => Ok(Self::Pace),
            "speed" => Ok(Self::Speed),
            other => Err(AppError::invalid_format(format!(
                "Unknown percentage method: '{other}'. Valid options: pace, speed"
            ))),
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// `GET /race_pace`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePaceQuery {
    /// Finish time (`H:MM:SS` or `M:SS`)
    #[serde(default = "default_finish_time")]
    pub finish_time: String,
    /// Unit of the returned pace
    #[serde(default)]
    pub unit: PaceUnit,
    /// Race distance in meters
    #[serde(default = "default_distance")]
    pub distance: f64,
}

impl Default for RacePaceQuery {
    fn default() -> Self {
        Self {
            finish_time: default_finish_time(),
            unit: PaceUnit::default(),
            distance: default_distance(),
        }
    }
}

/// `GET /race_time`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceTimeQuery {
    /// Pace per `unit`
    #[serde(default = "default_race_pace")]
    pub pace: String,
    /// Unit the pace is expressed per
    #[serde(default)]
    pub unit: PaceUnit,
    /// Race distance in meters
    #[serde(default = "default_distance")]
    pub distance: f64,
}

impl Default for RaceTimeQuery {
    fn default() -> Self {
        Self {
            pace: default_race_pace(),
            unit: PaceUnit::default(),
            distance: default_distance(),
        }
    }
}

/// `GET /pace_percentage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacePercentageQuery {
    /// Base pace
    #[serde(default = "default_training_pace")]
    pub pace: String,
    /// Pace or speed based percentage
    #[serde(default)]
    pub method: PercentageMethod,
    /// Whole-number percentage (95 = 95%)
    #[serde(default = "default_percentage")]
    pub percentage: u32,
}

/// `GET /pace_workouts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceWorkoutsQuery {
    /// Goal race pace
    #[serde(default = "default_training_pace")]
    pub pace: String,
    /// Pace or speed based percentage
    #[serde(default)]
    pub method: PercentageMethod,
}

/// `GET /convert_pace`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertPaceQuery {
    /// Pace in the unit opposite to `target_unit`
    #[serde(default = "default_training_pace")]
    pub pace: String,
    /// Unit to convert into
    #[serde(default)]
    pub target_unit: PaceUnit,
}

/// `GET /vdot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdotQuery {
    /// Race distance in meters
    #[serde(default = "default_distance")]
    pub distance: f64,
    /// Race time
    #[serde(default = "default_finish_time")]
    pub time: String,
}

/// `GET /vdot_paces`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdotPacesQuery {
    /// VDOT score
    pub vdot: f64,
    /// Unit of the returned paces
    #[serde(default)]
    pub unit: PaceUnit,
}

/// `GET /pfitz_long_run_pace`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongRunQuery {
    /// Long run length in `unit`
    #[serde(default = "default_long_run_distance")]
    pub distance: u32,
    /// Goal marathon pace
    #[serde(default = "default_race_pace")]
    pub marathon_pace: String,
    /// Unit of distance and pace
    #[serde(default)]
    pub unit: PaceUnit,
}

/// `GET /heart_rate_zones`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateQuery {
    /// Maximum heart rate in bpm
    #[serde(default = "default_max_heart_rate")]
    pub max_heart_rate: u32,
}

// ============================================================================
// Responses
// ============================================================================

/// `{"pace": "M:SS"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceResponse {
    /// Formatted pace
    pub pace: String,
}

/// `{"time": "H:MM:SS"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResponse {
    /// Formatted finish time
    pub time: String,
}

/// `{"vdot": 49.8}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VdotResponse {
    /// VDOT rounded to one decimal
    pub vdot: f64,
}

/// One row of the percentage-of-pace workout table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPace {
    /// Whole-number percentage of goal pace
    #[serde(rename = "Percentage of Pace")]
    pub percentage: u32,
    /// Training designation for this intensity
    #[serde(rename = "Designation")]
    pub designation: String,
    /// Formatted target pace
    #[serde(rename = "Pace")]
    pub pace: String,
}

/// `{"workout_paces": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPacesResponse {
    /// Rows ordered by ascending percentage
    pub workout_paces: Vec<WorkoutPace>,
}

/// Daniels-style training paces for a VDOT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Easy running, slow end
    #[serde(rename = "Easy (lower)")]
    pub easy_lower: String,
    /// Easy running, fast end
    #[serde(rename = "Easy (upper)")]
    pub easy_upper: String,
    /// Marathon pace
    #[serde(rename = "Marathon")]
    pub marathon: String,
    /// Threshold pace
    #[serde(rename = "Threshold")]
    pub threshold: String,
    /// Interval pace
    #[serde(rename = "Interval")]
    pub interval: String,
    /// Repetition pace
    #[serde(rename = "Repetitions")]
    pub repetitions: String,
}

impl TrainingPaces {
    /// `(name, pace)` pairs in table order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("Easy (lower)", &self.easy_lower),
            ("Easy (upper)", &self.easy_upper),
            ("Marathon", &self.marathon),
            ("Threshold", &self.threshold),
            ("Interval", &self.interval),
            ("Repetitions", &self.repetitions),
        ]
    }
}

/// `{"training_paces": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPacesResponse {
    /// Paces keyed by training intensity
    pub training_paces: TrainingPaces,
}

/// Key holding the target range in a long-run row
const TARGET_PACE_KEY: &str = "Target Pace";

/// One split of a progressive long run
///
/// Serialized as `{"<unit>": split, "Target Pace": "low to high"}`, so the
/// split counter's key is the pace unit itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRunSplit {
    /// 1-based split number
    pub split: u32,
    /// Unit the split is measured in
    pub unit: PaceUnit,
    /// Fast end of the target range
    pub target_low: String,
    /// Slow end of the target range
    pub target_high: String,
}

impl LongRunSplit {
    /// Target range as displayed, e.g. `"7:08 to 7:12"`
    #[must_use]
    pub fn target_pace(&self) -> String {
        format!("{} to {}", self.target_low, self.target_high)
    }
}

impl Serialize for LongRunSplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.unit.as_str(), &self.split)?;
        map.serialize_entry(TARGET_PACE_KEY, &self.target_pace())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for LongRunSplit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut split = None;
        let mut target = None;
        for (key, value) in raw {
            if key == TARGET_PACE_KEY {
                target = value.as_str().map(str::to_owned);
            } else if let Ok(unit) = key.parse::<PaceUnit>() {
                let number = value
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| de::Error::custom("split number must be a small integer"))?;
                split = Some((unit, number));
            }
        }

        let (unit, split) = split.ok_or_else(|| de::Error::missing_field("mi|km"))?;
        let target = target.ok_or_else(|| de::Error::missing_field(TARGET_PACE_KEY))?;
        let (low, high) = target
            .split_once(" to ")
            .ok_or_else(|| de::Error::custom(format!("malformed target pace '{target}'")))?;

        Ok(Self {
            split,
            unit,
            target_low: low.to_owned(),
            target_high: high.to_owned(),
        })
    }
}

/// Inclusive heart rate range in bpm
pub type ZoneRange = (u32, u32);

/// Heart rate zones keyed 1 through 5
pub type HeartRateZones = BTreeMap<u8, ZoneRange>;

/// `{"text": "Marathon Training Planner"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBanner {
    /// Service title
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_apply_on_empty_input() {
        let query: RacePaceQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, RacePaceQuery::default());
        assert_eq!(query.finish_time, "20:00");

        let query: PacePercentageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.pace, "6:00");
        assert_eq!(query.percentage, 95);
        assert_eq!(query.method, PercentageMethod::Pace);
    }

    #[test]
    fn test_workout_pace_uses_display_keys() {
        let row = WorkoutPace {
            percentage: 80,
            designation: "Basic Endurance".to_owned(),
            pace: "7:12".to_owned(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Percentage of Pace"], 80);
        assert_eq!(json["Designation"], "Basic Endurance");
        assert_eq!(json["Pace"], "7:12");
    }

    #[test]
    fn test_long_run_split_keys_by_unit() {
        let split = LongRunSplit {
            split: 3,
            unit: PaceUnit::Kilometer,
            target_low: "4:40".to_owned(),
            target_high: "4:44".to_owned(),
        };
        let json = serde_json::to_value(&split).unwrap();
        assert_eq!(json["km"], 3);
        assert_eq!(json["Target Pace"], "4:40 to 4:44");

        let back: LongRunSplit = serde_json::from_value(json).unwrap();
        assert_eq!(back, split);
    }

    #[test]
    fn test_heart_rate_zones_serialize_with_string_keys() {
        let mut zones = HeartRateZones::new();
        zones.insert(1, (92, 111));
        let json = serde_json::to_string(&zones).unwrap();
        assert_eq!(json, r#"{"1":[92,111]}"#);
    }
}
