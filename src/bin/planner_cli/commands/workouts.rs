// ABOUTME: Saved workout commands for planner-cli
// ABOUTME: Create, list, show, and delete workouts stored by the pace service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::helpers::display;
use anyhow::Result;
use marathon_planner::client::PlannerApiClient;
use planner_core::models::WorkoutCreate;

/// Save a workout
pub async fn create(
    client: &PlannerApiClient,
    name: String,
    pace: Option<String>,
    distance: Option<f64>,
    time: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let workout = WorkoutCreate {
        name,
        pace,
        distance,
        time,
        notes,
    };
    workout.validate()?;

    let created = client.create_workout(&workout).await?;
    println!("Saved workout:");
    display::display_workout(&created);
    Ok(())
}

/// List every saved workout
pub async fn list(client: &PlannerApiClient) -> Result<()> {
    let workouts = client.list_workouts().await?;
    if workouts.is_empty() {
        println!("No saved workouts");
        return Ok(());
    }
    for workout in &workouts {
        display::display_workout(workout);
    }
    println!("\n{} workout(s)", workouts.len());
    Ok(())
}

/// Show one workout
pub async fn get(client: &PlannerApiClient, id: i64) -> Result<()> {
    let workout = client.get_workout(id).await?;
    display::display_workout(&workout);
    Ok(())
}

/// Delete one workout
pub async fn delete(client: &PlannerApiClient, id: i64) -> Result<()> {
    client.delete_workout(id).await?;
    println!("Deleted workout {id}");
    Ok(())
}
