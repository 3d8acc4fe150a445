// ABOUTME: Main library entry point for the Marathon Training Planner
// ABOUTME: Pace service routes, workout store, API client, and calculator orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

#![deny(unsafe_code)]

//! # Marathon Training Planner
//!
//! A race pace calculator and workout planner. Pick a race distance, enter a
//! finish time or a pace, and get back the missing value, a percentage-of-pace
//! workout table, and a VDOT score.
//!
//! ## Architecture
//!
//! - **`planner_core`**: error type, constants, input masks, wire models
//! - **`planner_intelligence`**: the pure calculation algorithms
//! - **this crate**: the axum HTTP service and its SQLite workout store,
//!   a reqwest client for that service, and the [`planner::Calculator`] and
//!   [`planner::WorkoutBuilder`] state machines the CLI drives
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use marathon_planner::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     marathon_planner::server::run(config).await
//! }
//! ```

/// Typed HTTP client for the pace service
pub mod client;

/// Environment-based configuration
pub mod config;

/// SQLite workout store
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs, tracing)
pub mod middleware;

/// Calculator and workout builder state machines
pub mod planner;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Unified error handling, re-exported from `planner_core`
pub use planner_core::errors;
