// ABOUTME: Route module organization for the pace service HTTP endpoints
// ABOUTME: Groups handlers by domain and merges them into one axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! HTTP routes
//!
//! Each domain module holds route definitions and thin handlers that call
//! into `planner_intelligence` or the workout store. Query strings that fail
//! to deserialize are reported through the same JSON error body as every
//! other error.

/// Service banner, liveness, and readiness
pub mod health;
/// Race pace, finish time, percentage, and conversion endpoints
pub mod paces;
/// VDOT, training pace, long run, and heart rate endpoints
pub mod training;
/// Saved workout endpoints
pub mod workouts;

pub use health::HealthRoutes;
pub use paces::PaceRoutes;
pub use training::TrainingRoutes;
pub use workouts::WorkoutRoutes;

use crate::resources::ServerResources;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::Router;
use planner_core::errors::AppError;
use std::sync::Arc;

/// Every route the service exposes, without middleware
pub fn api_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PaceRoutes::routes())
        .merge(TrainingRoutes::routes())
        .merge(WorkoutRoutes::routes(resources))
}

/// Convert a query-string rejection into a 400 with the standard body
pub(crate) fn query_error(rejection: &QueryRejection) -> AppError {
    AppError::invalid_input(format!("Invalid query parameters: {}", rejection.body_text()))
}

/// Convert a JSON body rejection into a 400 with the standard body
pub(crate) fn json_error(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
}
