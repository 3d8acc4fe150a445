// ABOUTME: Shared domain and wire models for the planner service and its clients
// ABOUTME: Units, race distances, query/response shapes, and saved workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Shared models
//!
//! The service and the HTTP client both use these types, so a request built
//! by the client deserializes on the server without a second definition.

/// Query and response types for the pace endpoints
pub mod api;
/// Race distance selector
pub mod race;
/// Pace and distance units
pub mod units;
/// Saved workout records
pub mod workout;

pub use api::{
    ConvertPaceQuery, HeartRateQuery, HeartRateZones, LongRunQuery, LongRunSplit,
    PacePercentageQuery, PaceResponse, PaceWorkoutsQuery, PercentageMethod, RacePaceQuery,
    RaceTimeQuery, ServiceBanner, TimeResponse, TrainingPaces, TrainingPacesResponse, VdotPacesQuery,
    VdotQuery, VdotResponse, WorkoutPace, WorkoutPacesResponse, ZoneRange,
};
pub use race::RaceDistance;
pub use units::{DistanceUnit, PaceUnit};
pub use workout::{Workout, WorkoutCreate};
