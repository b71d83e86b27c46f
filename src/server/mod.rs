//! HTTP front end for the extraction pipeline.
//!
//! Provides three endpoints:
//! - `/` - HTML feature page for `?url=...`
//! - `/json` - JSON feature record for `?url=...`
//! - `/status` - degradation counters and uptime
//!
//! Every valid request gets a response; unreachable collaborators only
//! leave fields of the feature record empty.

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;

use handlers::{features_html_handler, features_json_handler, status_handler};
pub use types::AppState;

/// Builds the router with all endpoints bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(features_html_handler))
        .route("/json", get(features_json_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Binds `addr` and serves until the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Listening on http://{}/", addr);
    log::info!("  - HTML: http://{}/?url=example.com", addr);
    log::info!("  - JSON: http://{}/json?url=example.com", addr);
    log::info!("  - Status: http://{}/status", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
