//! JSON HTTP API over the performance model.
//!
//! Provides three GET endpoints:
//! - `/parameters`: control catalogue and base values
//! - `/evaluate`: scalar outputs for the queried input
//! - `/sweeps`: both chart series for the queried input

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::model::types::SimulationInput;

/// Immutable application state shared across all request handlers.
///
/// Wrapped in `Arc`; no locks needed since handlers only read it.
pub struct AppState {
    /// Input used for any parameter a query omits.
    pub base: SimulationInput,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/parameters", get(handlers::get_parameters))
        .route("/evaluate", get(handlers::get_evaluate))
        .route("/sweeps", get(handlers::get_sweeps))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
