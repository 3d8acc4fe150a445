// ABOUTME: VDOT, training pace, long run, and heart rate zone endpoints
// ABOUTME: Thin handlers over the calculation crate returning the JSON shapes clients expect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::query_error;
use axum::extract::rejection::QueryRejection;
use axum::{extract::Query, routing::get, Json, Router};
use planner_core::constants::endpoints;
use planner_core::errors::AppError;
use planner_core::models::{
    HeartRateQuery, HeartRateZones, LongRunQuery, LongRunSplit, TrainingPacesResponse,
    VdotPacesQuery, VdotQuery, VdotResponse,
};
use planner_intelligence::algorithms::{
    heart_rate_zones, long_run_splits, training_paces, vdot_from_race,
};

/// Training metric routes
pub struct TrainingRoutes;

impl TrainingRoutes {
    /// Create all training routes
    pub fn routes() -> Router {
        Router::new()
            .route(endpoints::VDOT, get(Self::handle_vdot))
            .route(endpoints::VDOT_PACES, get(Self::handle_vdot_paces))
            .route(endpoints::LONG_RUN_PACE, get(Self::handle_long_run))
            .route(endpoints::HEART_RATE_ZONES, get(Self::handle_heart_rate_zones))
    }

    async fn handle_vdot(
        query: Result<Query<VdotQuery>, QueryRejection>,
    ) -> Result<Json<VdotResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let vdot = vdot_from_race(params.distance, &params.time)?;
        Ok(Json(VdotResponse { vdot }))
    }

    /// `vdot` has no default and is required
    async fn handle_vdot_paces(
        query: Result<Query<VdotPacesQuery>, QueryRejection>,
    ) -> Result<Json<TrainingPacesResponse>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let training_paces = training_paces(params.vdot, params.unit)?;
        Ok(Json(TrainingPacesResponse { training_paces }))
    }

    async fn handle_long_run(
        query: Result<Query<LongRunQuery>, QueryRejection>,
    ) -> Result<Json<Vec<LongRunSplit>>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let splits = long_run_splits(params.distance, &params.marathon_pace, params.unit)?;
        Ok(Json(splits))
    }

    async fn handle_heart_rate_zones(
        query: Result<Query<HeartRateQuery>, QueryRejection>,
    ) -> Result<Json<HeartRateZones>, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        Ok(Json(heart_rate_zones(params.max_heart_rate)?))
    }
}
