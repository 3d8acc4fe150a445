// ABOUTME: HTTP server assembly for the pace service
// ABOUTME: Stacks middleware over the API router, binds the listener, and shuts down on signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::{
    propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer,
};
use crate::resources::ServerResources;
use crate::routes::api_router;
use anyhow::{Context, Result};
use axum::Router;
use planner_core::errors::AppError;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

async fn handle_unknown_route() -> AppError {
    AppError::not_found("Route")
}

/// API router with the full middleware stack
///
/// Layers run outermost first: request ID assignment, tracing, request ID
/// propagation, CORS, then the timeout.
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    api_router(Arc::clone(resources))
        .fallback(handle_unknown_route)
        .layer(TimeoutLayer::new(resources.config.request_timeout()))
        .layer(setup_cors(&resources.config))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(set_request_id_layer())
}

/// Serve `app` on `listener` until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")
}

/// Open the database, bind, and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the address cannot be
/// bound, or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let database = Database::connect(&config.database).await?;
    let address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config, database));
    let app = build_router(&resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "Marathon planner listening");

    serve(listener, app, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
