// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, race distances, endpoints, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than collected in a single file.

/// Standard race distances in meters
pub mod distances;
/// Unit conversion and measurement constants
pub mod units;

/// Service identity used in logs and the root endpoint
pub mod service_names {
    /// Service name reported by the HTTP server
    pub const PLANNER_SERVER: &str = "marathon-planner-server";
    /// Display title served at `/`
    pub const DISPLAY_TITLE: &str = "Marathon Training Planner";
}

/// Network ports
pub mod ports {
    /// Default HTTP port for the pace service
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// HTTP endpoint paths served by the pace service
pub mod endpoints {
    /// Service banner
    pub const ROOT: &str = "/";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
    /// Finish time -> pace
    pub const RACE_PACE: &str = "/race_pace";
    /// Pace -> finish time
    pub const RACE_TIME: &str = "/race_time";
    /// Single percentage-of-pace adjustment
    pub const PACE_PERCENTAGE: &str = "/pace_percentage";
    /// Percentage-of-pace workout table
    pub const PACE_WORKOUTS: &str = "/pace_workouts";
    /// Pace unit conversion
    pub const CONVERT_PACE: &str = "/convert_pace";
    /// VDOT from a race result
    pub const VDOT: &str = "/vdot";
    /// Training paces for a VDOT
    pub const VDOT_PACES: &str = "/vdot_paces";
    /// Pfitzinger long-run progression
    pub const LONG_RUN_PACE: &str = "/pfitz_long_run_pace";
    /// Heart rate training zones
    pub const HEART_RATE_ZONES: &str = "/heart_rate_zones";
    /// Create a saved workout
    pub const CREATE_WORKOUT: &str = "/create_workout";
    /// List saved workouts
    pub const GET_WORKOUTS: &str = "/get_workouts";
    /// Prefix for single-workout routes (`/workouts/{id}`)
    pub const WORKOUTS: &str = "/workouts";
}

/// Query-parameter defaults applied when a request omits a value
pub mod defaults {
    /// Default finish time for `/race_pace` and `/vdot`
    pub const FINISH_TIME: &str = "20:00";
    /// Default pace for `/race_time` and the long-run marathon pace
    pub const RACE_PACE: &str = "6:30";
    /// Default pace for percentage and conversion endpoints
    pub const TRAINING_PACE: &str = "6:00";
    /// Default race distance in meters
    pub const DISTANCE_METERS: f64 = 5000.0;
    /// Default single percentage
    pub const PERCENTAGE: u32 = 95;
    /// Default long run length in the pace unit
    pub const LONG_RUN_DISTANCE: u32 = 15;
    /// Default maximum heart rate
    pub const MAX_HEART_RATE: u32 = 185;
    /// Default base URL the client talks to
    pub const API_BASE_URL: &str = "http://127.0.0.1:8000";
}

/// Validation limits for persisted workouts
pub mod limits {
    /// Maximum workout name length
    pub const WORKOUT_NAME_MAX_LEN: usize = 100;
    /// Maximum stored pace string length (`MM:SS`)
    pub const WORKOUT_PACE_MAX_LEN: usize = 5;
    /// Maximum stored time string length (`HH:MM:SS`)
    pub const WORKOUT_TIME_MAX_LEN: usize = 8;
    /// Exclusive upper bound on stored workout distance
    pub const WORKOUT_DISTANCE_MAX: f64 = 100.0;
    /// Upper bound on long-run length accepted by the service
    pub const LONG_RUN_MAX_DISTANCE: u32 = 50;
}

/// User-visible messages shown when a request from the calculator fails
pub mod messages {
    /// Pace, workout table, or VDOT lookup failed
    pub const FETCH_PACE_FAILED: &str = "Failed to fetch pace.";
    /// Finish time lookup failed
    pub const FETCH_TIME_FAILED: &str = "Failed to fetch time";
    /// Pace conversion failed after a unit switch
    pub const SWITCH_UNITS_FAILED: &str = "Failed to switch units";
}
