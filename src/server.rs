use std::{net::SocketAddr, str::FromStr};

use axum::{Extension, Router, routing::get};
use tracing::info;

use crate::{api, error, management::StatsManager};

pub fn router(manager: StatsManager) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/playlist", get(api::playlist))
        .route("/recs", get(api::recs))
        .layer(Extension(manager))
}

/// Binds `addr` and serves the API until the process stops.
///
/// Failing to parse or bind the address is fatal.
pub async fn start_api_server(manager: StatsManager, addr: &str) {
    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to listen on {}: {}", addr, e),
    };

    info!(%addr, "listening");
    if let Err(e) = axum::serve(listener, router(manager)).await {
        error!("Server stopped unexpectedly: {}", e);
    }
}
