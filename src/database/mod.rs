// ABOUTME: SQLite connection setup and schema creation for the workout store
// ABOUTME: Opens the pool described by DATABASE_URL and creates tables on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! # Database Management
//!
//! The pace endpoints are stateless; only saved workouts touch the database.
//! [`Database::connect`] opens the pool and runs the schema, and
//! [`WorkoutStore`] holds the CRUD operations.

mod workouts;

pub use workouts::WorkoutStore;

use crate::config::DatabaseUrl;
use planner_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tokio::fs;
use tracing::info;

/// Maximum pooled connections for a file database
const MAX_CONNECTIONS: u32 = 5;

/// Database handle owning the connection pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database and create missing tables
    ///
    /// An in-memory database is held on a single connection that is never
    /// recycled; every other connection to `:memory:` sees its own empty
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// connection fails, or the schema cannot be applied
    pub async fn connect(url: &DatabaseUrl) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}",
                        parent.display()
                    ))
                    .with_source(e)
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())?
            .create_if_missing(true);
        let pool_options = if url.is_memory() {
            // Dropping the only connection would drop the database with it
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await?;

        let database = Self { pool };
        database.migrate().await?;
        info!(database = %url, "Workout database ready");
        Ok(database)
    }

    /// In-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema fails
    pub async fn in_memory() -> AppResult<Self> {
        Self::connect(&DatabaseUrl::Memory).await
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Workout operations over this pool
    #[must_use]
    pub fn workouts(&self) -> WorkoutStore {
        WorkoutStore::new(self.pool.clone())
    }

    /// Round-trip a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create tables that do not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL,
                pace VARCHAR(5),
                time VARCHAR(8),
                distance REAL,
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to create workouts table").with_source(e))?;

        Ok(())
    }
}
