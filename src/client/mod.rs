// ABOUTME: Pace service access for the calculator, over HTTP or in-process
// ABOUTME: Defines the PaceApi trait with a reqwest implementation and a local one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! # Pace service clients
//!
//! [`PaceApi`] is the surface the [`Calculator`](crate::planner::Calculator)
//! needs: the five endpoints it calls while a user works through a race.
//! [`PlannerApiClient`] implements it over HTTP and adds the remaining
//! endpoints as inherent methods. [`LocalPaceApi`] answers the same calls
//! in-process from `planner_intelligence`, which lets the CLI run without a
//! server.

mod http;
mod local;

pub use http::PlannerApiClient;
pub use local::LocalPaceApi;

use async_trait::async_trait;
use planner_core::errors::AppResult;
use planner_core::models::{
    ConvertPaceQuery, PaceResponse, PaceWorkoutsQuery, RacePaceQuery, RaceTimeQuery,
    TimeResponse, VdotQuery, VdotResponse, WorkoutPacesResponse,
};

/// Pace endpoints consumed by the calculator
#[async_trait]
pub trait PaceApi: Send + Sync {
    /// `GET /race_pace`
    async fn race_pace(&self, query: &RacePaceQuery) -> AppResult<PaceResponse>;

    /// `GET /race_time`
    async fn race_time(&self, query: &RaceTimeQuery) -> AppResult<TimeResponse>;

    /// `GET /pace_workouts`
    async fn pace_workouts(&self, query: &PaceWorkoutsQuery) -> AppResult<WorkoutPacesResponse>;

    /// `GET /convert_pace`
    async fn convert_pace(&self, query: &ConvertPaceQuery) -> AppResult<PaceResponse>;

    /// `GET /vdot`
    async fn vdot(&self, query: &VdotQuery) -> AppResult<VdotResponse>;
}
