// ABOUTME: Saved workout endpoints backed by the SQLite workout store
// ABOUTME: Create, list, fetch, and delete; unknown ids answer 404 with the standard error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use super::json_error;
use crate::middleware::RequestContext;
use crate::resources::ServerResources;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use planner_core::constants::endpoints;
use planner_core::errors::AppError;
use planner_core::models::{Workout, WorkoutCreate};
use std::sync::Arc;
use tracing::info;

/// Saved workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let by_id = format!("{}/:workout_id", endpoints::WORKOUTS);
        Router::new()
            .route(endpoints::CREATE_WORKOUT, post(Self::handle_create))
            .route(endpoints::GET_WORKOUTS, get(Self::handle_list))
            .route(&by_id, get(Self::handle_get).delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        body: Result<Json<WorkoutCreate>, JsonRejection>,
    ) -> Result<Json<Workout>, AppError> {
        let Json(request) = body.map_err(|e| json_error(&e).with_request_id(&context.request_id))?;
        let workout = resources
            .workouts()
            .create(&request)
            .await
            .map_err(|e| e.with_request_id(&context.request_id))?;

        info!(workout_id = workout.id, request_id = %context.request_id, "Workout saved");
        Ok(Json(workout))
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Workout>>, AppError> {
        Ok(Json(resources.workouts().list().await?))
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Json<Workout>, AppError> {
        let Path(workout_id) = path.map_err(|e| path_error(&e))?;
        resources
            .workouts()
            .get(workout_id)
            .await?
            .map(Json)
            .ok_or_else(|| {
                AppError::not_found(format!("Workout with id {workout_id}"))
                    .with_request_id(&context.request_id)
            })
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<StatusCode, AppError> {
        let Path(workout_id) = path.map_err(|e| path_error(&e))?;
        resources
            .workouts()
            .delete(workout_id)
            .await
            .map_err(|e| e.with_request_id(&context.request_id))?;
        Ok(StatusCode::NO_CONTENT)
    }
}

fn path_error(rejection: &PathRejection) -> AppError {
    AppError::invalid_input(format!("Invalid workout id: {}", rejection.body_text()))
}
