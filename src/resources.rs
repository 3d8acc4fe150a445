// ABOUTME: Shared server state handed to route handlers
// ABOUTME: Bundles the loaded configuration with the workout database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::config::ServerConfig;
use crate::database::{Database, WorkoutStore};

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: ServerConfig,
    /// Workout database
    pub database: Database,
}

impl ServerResources {
    /// Bundle configuration and database
    #[must_use]
    pub const fn new(config: ServerConfig, database: Database) -> Self {
        Self { config, database }
    }

    /// Saved workout operations
    #[must_use]
    pub fn workouts(&self) -> WorkoutStore {
        self.database.workouts()
    }
}
