// ABOUTME: Configuration module for the pace service
// ABOUTME: Environment-only server settings; the CLI reads its own flags through clap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Configuration for the Marathon Training Planner service

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
