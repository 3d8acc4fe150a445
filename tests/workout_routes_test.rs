// ABOUTME: Integration tests for the saved workout endpoints
// ABOUTME: Covers create, list, fetch, delete, validation limits, and the 404 error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use helpers::test_app;
use planner_core::models::{Workout, WorkoutCreate};
use serde_json::{json, Value};

fn tempo() -> WorkoutCreate {
    WorkoutCreate {
        name: "Tempo".to_owned(),
        pace: Some("7:30".to_owned()),
        distance: Some(6.0),
        time: Some("0:45:00".to_owned()),
        notes: Some("Steady".to_owned()),
    }
}

async fn create(app: &Router, workout: &WorkoutCreate) -> Workout {
    AxumTestRequest::post("/create_workout")
        .json(workout)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json()
}

#[tokio::test]
async fn test_create_returns_stored_workout() {
    let app = test_app().await;
    let workout = create(&app, &tempo()).await;

    assert!(workout.id > 0);
    assert_eq!(workout.name, "Tempo");
    assert_eq!(workout.pace.as_deref(), Some("7:30"));
    assert_eq!(workout.distance, Some(6.0));
    assert_eq!(workout.notes.as_deref(), Some("Steady"));
}

#[tokio::test]
async fn test_create_with_name_only() {
    let app = test_app().await;
    let workout = create(
        &app,
        &WorkoutCreate {
            name: "Easy".to_owned(),
            ..WorkoutCreate::default()
        },
    )
    .await;

    assert_eq!(workout.pace, None);
    assert_eq!(workout.distance, None);
    assert_eq!(workout.time, None);
}

#[tokio::test]
async fn test_distance_rounded_to_hundredths() {
    let app = test_app().await;
    let workout = create(
        &app,
        &WorkoutCreate {
            distance: Some(13.109),
            ..tempo()
        },
    )
    .await;
    assert_eq!(workout.distance, Some(13.11));
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let app = test_app().await;
    let empty: Vec<Workout> = AxumTestRequest::get("/get_workouts")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(empty.is_empty());

    let first = create(&app, &tempo()).await;
    let second = create(
        &app,
        &WorkoutCreate {
            name: "Intervals".to_owned(),
            ..tempo()
        },
    )
    .await;

    let listed: Vec<Workout> = AxumTestRequest::get("/get_workouts")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn test_get_and_delete_by_id() {
    let app = test_app().await;
    let workout = create(&app, &tempo()).await;
    let uri = format!("/workouts/{}", workout.id);

    let fetched: Workout = AxumTestRequest::get(&uri)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched, workout);

    AxumTestRequest::delete(&uri)
        .send(app.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    AxumTestRequest::get(&uri)
        .send(app.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    AxumTestRequest::delete(&uri)
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_workout_error_body() {
    let response = AxumTestRequest::get("/workouts/999")
        .header("x-request-id", "req-42")
        .send(test_app().await)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(response.header("x-request-id"), Some("req-42"));
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["request_id"], "req-42");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    AxumTestRequest::get("/workouts/tempo")
        .send(test_app().await)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_validation_limits() {
    let app = test_app().await;
    let cases = [
        json!({ "name": "" }),
        json!({ "name": "x".repeat(101) }),
        json!({ "name": "Tempo", "pace": "10:00:00" }),
        json!({ "name": "Tempo", "time": "100:00:00" }),
        json!({ "name": "Tempo", "distance": 100.0 }),
        json!({ "name": "Tempo", "distance": -1.0 }),
    ];

    for case in &cases {
        AxumTestRequest::post("/create_workout")
            .json(case)
            .send(app.clone())
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let listed: Vec<Workout> = AxumTestRequest::get("/get_workouts")
        .send(app)
        .await
        .json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_malformed_body_uses_error_body() {
    let body: Value = AxumTestRequest::post("/create_workout")
        .header("content-type", "application/json")
        .raw_body("{\"name\":")
        .send(test_app().await)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}
