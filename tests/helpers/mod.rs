// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Builds the router over an in-memory workout store and exposes the Axum request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use axum::Router;
use marathon_planner::config::{DatabaseUrl, ServerConfig};
use marathon_planner::database::Database;
use marathon_planner::resources::ServerResources;
use marathon_planner::server::build_router;
use std::sync::Arc;

/// Configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseUrl::Memory,
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory database
pub async fn test_resources() -> Arc<ServerResources> {
    let config = test_config();
    let database = Database::connect(&config.database)
        .await
        .expect("Failed to open in-memory database");
    Arc::new(ServerResources::new(config, database))
}

/// Fully layered router over a fresh in-memory database
pub async fn test_app() -> Router {
    build_router(&test_resources().await)
}
