// ABOUTME: Shared helpers for planner-cli
// ABOUTME: Backend selection (service or in-process) and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

pub mod display;

use anyhow::{anyhow, Result};
use marathon_planner::client::{LocalPaceApi, PaceApi, PlannerApiClient};
use std::fmt;

/// Where calculations are answered
pub enum Backend {
    /// In-process, no server needed
    Local(LocalPaceApi),
    /// The pace service over HTTP
    Remote(PlannerApiClient),
}

impl Backend {
    /// The calculator-facing API of either backend
    pub fn api(&self) -> &dyn PaceApi {
        match self {
            Self::Local(api) => api,
            Self::Remote(client) => client,
        }
    }

    /// The HTTP client, for operations only the service can perform
    pub fn remote(&self) -> Result<&PlannerApiClient> {
        match self {
            Self::Remote(client) => Ok(client),
            Self::Local(_) => Err(anyhow!(
                "Saved workouts live in the service database; run without --offline"
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(_) => f.write_str("local"),
            Self::Remote(client) => write!(f, "remote {}", client.base_url()),
        }
    }
}
