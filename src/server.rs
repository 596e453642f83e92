//! HTTP server initialization and runtime setup.
//!
//! Handles store creation, seeding, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::FlightRepository;
use crate::infrastructure::persistence::{InMemoryFlightRepository, seed};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Creates the flight store described by `config`.
///
/// The store lives in process memory only; every start begins from the seed
/// set (or empty when seeding is disabled).
pub fn build_repository(config: &Config) -> Arc<dyn FlightRepository> {
    if config.seed_flights {
        let flights = seed::demo_flights();
        tracing::info!(count = flights.len(), "Flight store seeded with demo flights");
        Arc::new(InMemoryFlightRepository::with_flights(flights))
    } else {
        tracing::info!("Flight store starts empty");
        Arc::new(InMemoryFlightRepository::new())
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Serves until Ctrl-C is received, then finishes in-flight requests.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(build_repository(&config));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
