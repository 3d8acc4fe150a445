// ABOUTME: Pace service binary serving the calculation endpoints and the workout store
// ABOUTME: Loads configuration from the environment, initializes logging, and runs until signalled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! # Marathon Planner Server Binary
//!
//! Configuration comes from environment variables (`HTTP_PORT`, `HOST`,
//! `DATABASE_URL`, `CORS_ALLOWED_ORIGINS`, `REQUEST_TIMEOUT_SECS`,
//! `LOG_LEVEL`, `ENVIRONMENT`); the flags below override the most common ones.

use anyhow::Result;
use clap::Parser;
use marathon_planner::config::{DatabaseUrl, ServerConfig};
use marathon_planner::{logging, server};
use planner_core::constants::endpoints;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "marathon-planner-server")]
#[command(about = "Marathon Training Planner - race pace and workout service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override database URL (`sqlite:path` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(url) = args.database_url {
        config.database = DatabaseUrl::parse_url(&url)?;
    }
    config.validate()?;

    info!("Starting Marathon Training Planner");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}

/// Log every endpoint the server answers
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available API Endpoints ===");
    for path in [
        endpoints::ROOT,
        endpoints::HEALTH,
        endpoints::READY,
        endpoints::RACE_PACE,
        endpoints::RACE_TIME,
        endpoints::PACE_PERCENTAGE,
        endpoints::PACE_WORKOUTS,
        endpoints::CONVERT_PACE,
        endpoints::VDOT,
        endpoints::VDOT_PACES,
        endpoints::LONG_RUN_PACE,
        endpoints::HEART_RATE_ZONES,
        endpoints::CREATE_WORKOUT,
        endpoints::GET_WORKOUTS,
    ] {
        info!("  {base}{path}");
    }
    info!("  {base}{}/{{id}}", endpoints::WORKOUTS);
}
