// ABOUTME: Race distance selector mapping standard race labels to meters
// ABOUTME: Supports the fixed track/road distances plus a user-supplied custom distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::units::DistanceUnit;
use crate::constants::distances;
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

/// A race distance as chosen in the calculator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RaceDistance {
    /// 800 meters
    EightHundred,
    /// 1600 meters
    SixteenHundred,
    /// 5 kilometers
    FiveK,
    /// 10 kilometers
    TenK,
    /// 21.0975 kilometers
    HalfMarathon,
    /// 42.195 kilometers
    #[default]
    Marathon,
    /// A custom distance entered by the user
    Other {
        /// Distance value in `unit`
        value: f64,
        /// Unit `value` is expressed in
        unit: DistanceUnit,
    },
}

impl RaceDistance {
    /// Standard distances in selector order
    pub const STANDARD: [Self; 6] = [
        Self::EightHundred,
        Self::SixteenHundred,
        Self::FiveK,
        Self::TenK,
        Self::HalfMarathon,
        Self::Marathon,
    ];

    /// Build a custom distance
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `value` is not a positive finite number
    pub fn other(value: f64, unit: DistanceUnit) -> AppResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Custom race distance must be positive, got {value}"
            )));
        }
        Ok(Self::Other { value, unit })
    }

    /// Selector label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EightHundred => "800M",
            Self::SixteenHundred => "1600M",
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
            Self::Other { .. } => "Other",
        }
    }

    /// Distance in meters
    #[must_use]
    pub fn meters(&self) -> f64 {
        match self {
            Self::EightHundred => distances::EIGHT_HUNDRED_M,
            Self::SixteenHundred => distances::SIXTEEN_HUNDRED_M,
            Self::FiveK => distances::FIVE_K,
            Self::TenK => distances::TEN_K,
            Self::HalfMarathon => distances::HALF_MARATHON,
            Self::Marathon => distances::MARATHON,
            Self::Other { value, unit } => unit.to_meters(*value),
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other { value, unit } => write!(f, "{value} {unit}"),
            standard => f.write_str(standard.label()),
        }
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    /// Parse a standard label (case-insensitive, a few common spellings accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match normalized.as_str() {
            "800m" | "800" => Ok(Self::EightHundred),
            "1600m" | "1600" => Ok(Self::SixteenHundred),
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "halfmarathon" | "half" => Ok(Self::HalfMarathon),
            "marathon" | "full" => Ok(Self::Marathon),
            _ => Err(AppError::invalid_format(format!(
                "Unknown race distance: '{s}'. Valid options: 800M, 1600M, 5K, 10K, Half Marathon, Marathon"
            ))),
        }
    }
}
