// ABOUTME: Service banner and health check routes
// ABOUTME: Liveness always answers; readiness also round-trips the workout database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use planner_core::constants::{endpoints, service_names};
use planner_core::models::ServiceBanner;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Banner and health routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the banner, health, and readiness routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::ROOT, get(Self::handle_root))
            .route(endpoints::HEALTH, get(Self::handle_health))
            .route(endpoints::READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_root() -> Json<ServiceBanner> {
        Json(ServiceBanner {
            text: service_names::DISPLAY_TITLE.to_owned(),
        })
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::PLANNER_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<Value>) {
        match resources.database.ping().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "database": "ok",
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            ),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "not_ready",
                        "database": "unavailable",
                        "timestamp": Utc::now().to_rfc3339(),
                    })),
                )
            }
        }
    }
}
