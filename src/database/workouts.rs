// ABOUTME: CRUD operations for saved workouts
// ABOUTME: Validates column limits before insert and maps rows back to the shared Workout model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use planner_core::errors::{AppError, AppResult};
use planner_core::models::{Workout, WorkoutCreate};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

/// Saved workout operations
#[derive(Debug, Clone)]
pub struct WorkoutStore {
    pool: SqlitePool,
}

impl WorkoutStore {
    /// Create a new workout store
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a workout and return it with its new id
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range fields, or a database error
    pub async fn create(&self, workout: &WorkoutCreate) -> AppResult<Workout> {
        workout.validate()?;

        let distance = workout.stored_distance();
        let result = sqlx::query(
            r"
            INSERT INTO workouts (name, pace, time, distance, notes)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&workout.name)
        .bind(&workout.pace)
        .bind(&workout.time)
        .bind(distance)
        .bind(&workout.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to create workout").with_source(e))?;

        let id = result.last_insert_rowid();
        debug!(workout_id = id, "Created workout");

        Ok(Workout {
            id,
            name: workout.name.clone(),
            pace: workout.pace.clone(),
            distance,
            time: workout.time.clone(),
            notes: workout.notes.clone(),
        })
    }

    /// All workouts in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, pace, time, distance, notes
            FROM workouts
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to list workouts").with_source(e))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Get a workout by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Workout>> {
        let row = sqlx::query(
            r"
            SELECT id, name, pace, time, distance, notes
            FROM workouts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to get workout").with_source(e))?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Delete a workout by id
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` if no workout has this id
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to delete workout").with_source(e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout with id {id}")));
        }
        debug!(workout_id = id, "Deleted workout");
        Ok(())
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    Ok(Workout {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        pace: row.try_get("pace")?,
        distance: row.try_get("distance")?,
        time: row.try_get("time")?,
        notes: row.try_get("notes")?,
    })
}
