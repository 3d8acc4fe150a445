// ABOUTME: Interactive planner state: race calculator and workout segment builder
// ABOUTME: Typed state machines driven by the CLI, talking to the service through PaceApi
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! # Planner
//!
//! [`Calculator`] holds one race calculation session: the selected distance,
//! the time and pace fields, the unit toggle, and the results fetched for
//! them. [`WorkoutBuilder`] assembles workout segments in memory; nothing it
//! holds is persisted.

/// Race pace calculator session
pub mod calculator;
/// Workout segment builder
pub mod workouts;

pub use calculator::{Calculator, LastUpdated};
pub use workouts::{
    display_pace, is_valid_pace, IntervalConfig, Measurement, PaceDisplayUnit, RecoveryInterval,
    RecoveryType, SegmentDistance, SegmentDraft, SegmentDuration, SegmentType, TargetPace,
    WorkoutBuilder, WorkoutBuilderError, WorkoutSegment,
};
