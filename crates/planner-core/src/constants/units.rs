// ABOUTME: Unit conversion constants for distance, time, and pace calculations
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Miles per kilometer, as used by the pace service
pub const MILES_PER_KM: f64 = 0.621;

/// Kilometers per mile, as used by the pace service
pub const KM_PER_MILE: f64 = 1.609;

/// Kilometers per mile used by the workout builder's display conversion
pub const KM_PER_MILE_PRECISE: f64 = 1.609_34;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Microseconds per second; durations are resolved to this precision
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
