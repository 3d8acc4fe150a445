// ABOUTME: Pace and distance unit enums with string parsing and meter conversions
// ABOUTME: Serialized as the short lowercase codes used on the wire (mi, km, m)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::constants::units::{KM_PER_MILE, METERS_PER_KM, MILES_PER_KM};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a pace is expressed per
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaceUnit {
    /// Minutes per mile
    #[default]
    #[serde(rename = "mi")]
    Mile,
    /// Minutes per kilometer
    #[serde(rename = "km")]
    Kilometer,
}

impl PaceUnit {
    /// Wire code for this unit
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mile => "mi",
            Self::Kilometer => "km",
        }
    }

    /// The other unit
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Mile => Self::Kilometer,
            Self::Kilometer => Self::Mile,
        }
    }

    /// Express a distance in meters as a count of this unit
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        let km = meters / METERS_PER_KM;
        match self {
            Self::Kilometer => km,
            Self::Mile => km * MILES_PER_KM,
        }
    }
}

impl fmt::Display for PaceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Self::Mile),
            "km" | "kilometer" | "kilometers" => Ok(Self::Kilometer),
            other => Err(AppError::invalid_format(format!(
                "Unknown pace unit: '{other}'. Valid options: mi, km"
            ))),
        }
    }
}

/// Unit for a free-form distance (custom race distance, workout segment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Miles
    #[default]
    #[serde(rename = "mi")]
    Mile,
    /// Kilometers
    #[serde(rename = "km")]
    Kilometer,
    /// Meters
    #[serde(rename = "m")]
    Meter,
}

impl DistanceUnit {
    /// Wire code for this unit
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mile => "mi",
            Self::Kilometer => "km",
            Self::Meter => "m",
        }
    }

    /// Convert a value in this unit to meters
    #[must_use]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Mile => value * KM_PER_MILE * METERS_PER_KM,
            Self::Kilometer => value * METERS_PER_KM,
            Self::Meter => value,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Self::Mile),
            "km" | "kilometer" | "kilometers" => Ok(Self::Kilometer),
            "m" | "meter" | "meters" => Ok(Self::Meter),
            other => Err(AppError::invalid_format(format!(
                "Unknown distance unit: '{other}'. Valid options: mi, km, m"
            ))),
        }
    }
}

impl From<PaceUnit> for DistanceUnit {
    fn from(unit: PaceUnit) -> Self {
        match unit {
            PaceUnit::Mile => Self::Mile,
            PaceUnit::Kilometer => Self::Kilometer,
        }
    }
}
