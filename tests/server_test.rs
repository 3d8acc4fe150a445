// ABOUTME: Integration tests for the assembled server: banner, health, fallback, and middleware
// ABOUTME: Verifies request IDs, CORS headers, and the JSON 404 for unknown routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::{test_app, test_config, test_resources};
use marathon_planner::database::Database;
use marathon_planner::resources::ServerResources;
use marathon_planner::server::build_router;
use planner_core::models::ServiceBanner;
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_root_banner() {
    let banner: ServiceBanner = AxumTestRequest::get("/")
        .send(test_app().await)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(banner.text, "Marathon Training Planner");
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = test_app().await;

    let health: Value = AxumTestRequest::get("/health")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "marathon-planner-server");

    let ready: Value = AxumTestRequest::get("/ready")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ready["status"], "ready");
}

#[tokio::test]
async fn test_ready_reports_closed_database() {
    let database = Database::in_memory().await.unwrap();
    database.pool().close().await;
    let app = build_router(&Arc::new(ServerResources::new(test_config(), database)));

    let ready: Value = AxumTestRequest::get("/ready")
        .send(app)
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .json();
    assert_eq!(ready["database"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_json_404() {
    let body: Value = AxumTestRequest::get("/no_such_route")
        .send(test_app().await)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let response = AxumTestRequest::get("/health").send(test_app().await).await;
    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_wildcard_cors() {
    let response = AxumTestRequest::get("/race_pace")
        .header("origin", "http://localhost:3000")
        .send(test_app().await)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_restricted_cors_omits_foreign_origin() {
    let resources = test_resources().await;
    let mut config = resources.config.clone();
    config.cors_allowed_origins = vec!["http://planner.local".to_owned()];
    let app = build_router(&Arc::new(ServerResources::new(
        config,
        resources.database.clone(),
    )));

    let allowed = AxumTestRequest::get("/health")
        .header("origin", "http://planner.local")
        .send(app.clone())
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin"),
        Some("http://planner.local")
    );

    let foreign = AxumTestRequest::get("/health")
        .header("origin", "http://elsewhere.example")
        .send(app)
        .await;
    assert_eq!(foreign.header("access-control-allow-origin"), None);
}
