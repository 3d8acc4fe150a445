// ABOUTME: Standard race distances expressed in meters
// ABOUTME: Backs the race distance selector and the distance lookups in the calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

/// 800 meters
pub const EIGHT_HUNDRED_M: f64 = 800.0;

/// 1600 meters (the "metric mile" track race)
pub const SIXTEEN_HUNDRED_M: f64 = 1600.0;

/// 5 kilometers
pub const FIVE_K: f64 = 5_000.0;

/// 10 kilometers
pub const TEN_K: f64 = 10_000.0;

/// Half marathon
pub const HALF_MARATHON: f64 = 21_097.5;

/// Marathon
pub const MARATHON: f64 = 42_195.0;
