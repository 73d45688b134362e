use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api,
    config::{self, ProviderConfig},
    error, success,
};

/// Builds the token proxy router.
///
/// Kept separate from [`start_api_server`] so tests can serve the app on an
/// ephemeral port with a hand-built [`ProviderConfig`].
pub fn app(provider: Arc<ProviderConfig>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/api/spotify-token",
            get(api::token).layer(Extension(provider)),
        )
}

/// Binds the configured address and serves the token proxy until shutdown.
///
/// The listen address comes from `address` when given, otherwise from the
/// `SERVER_ADDRESS` environment variable (with its default).
pub async fn start_api_server(provider: Arc<ProviderConfig>, address: Option<String>) {
    let app = app(provider);

    let addr = address.unwrap_or_else(config::server_addr);
    let addr = match SocketAddr::from_str(&addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    success!("Token proxy listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
