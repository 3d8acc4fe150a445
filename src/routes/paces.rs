// ABOUTME: Race pace, finish time, percentage-of-pace, and pace conversion endpoints
// ABOUTME: Thin handlers over the calculation crate; every parameter has a documented default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Pace routes
//!
//! All distances are meters. `unit` selects whether paces are per mile or per
//! kilometer.

use super::query_error;
use axum::extract::rejection::QueryRejection;
use axum::{extract::Query, routing::get, Json, Router};
use planner_core::constants::endpoints;
use planner_core::errors::AppError;
use planner_core::models::{
    ConvertPaceQuery, PacePercentageQuery, PaceResponse, PaceWorkoutsQuery, RacePaceQuery,
    RaceTimeQuery, TimeResponse, WorkoutPacesResponse,
};
use planner_intelligence::algorithms::{
    convert_pace, pace_percentage, race_pace, race_time, workout_paces,
};

/// Pace calculation routes
pub struct PaceRoutes;

impl PaceRoutes {
    /// Create all pace routes
    pub fn routes() -> Router {
        Router::new()
            .route(endpoints::RACE_PACE, get(Self::handle_race_pace))
            .route(endpoints::RACE_TIME, get(Self::handle_race_time))
            .route(endpoints::PACE_PERCENTAGE, get(Self::handle_pace_percentage))
            .route(endpoints::PACE_WORKOUTS, get(Self::handle_pace_workouts))
            .route(endpoints::CONVERT_PACE, get(Self::handle_convert_pace))
    }

    /// Finish time over a distance to pace per unit
    async fn handle_race_pace(
        query: Result<Query<RacePaceQuery>, QueryRejection>,
    ) -> Result<Json<PaceResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let pace = race_pace(&params.finish_time, params.unit, params.distance)?;
        Ok(Json(PaceResponse { pace }))
    }

    /// Pace per unit over a distance to finish time
    async fn handle_race_time(
        query: Result<Query<RaceTimeQuery>, QueryRejection>,
    ) -> Result<Json<TimeResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let time = race_time(&params.pace, params.unit, params.distance)?;
        Ok(Json(TimeResponse { time }))
    }

    async fn handle_pace_percentage(
        query: Result<Query<PacePercentageQuery>, QueryRejection>,
    ) -> Result<Json<PaceResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let pace = pace_percentage(&params.pace, params.method, params.percentage)?;
        Ok(Json(PaceResponse { pace }))
    }

    async fn handle_pace_workouts(
        query: Result<Query<PaceWorkoutsQuery>, QueryRejection>,
    ) -> Result<Json<WorkoutPacesResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let workout_paces = workout_paces(&params.pace, params.method)?;
        Ok(Json(WorkoutPacesResponse { workout_paces }))
    }

    async fn handle_convert_pace(
        query: Result<Query<ConvertPaceQuery>, QueryRejection>,
    ) -> Result<Json<PaceResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let pace = convert_pace(&params.pace, params.target_unit)?;
        Ok(Json(PaceResponse { pace }))
    }
}
