use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{config::ProviderConfig, error::Error, spotify, warning};

/// Handles `GET /api/spotify-token`.
///
/// Stateless per request: checks that both credential halves are configured,
/// performs the client-credentials exchange, and reduces the upstream
/// response to `{"access_token": "..."}`. No server-side caching; every call
/// re-authenticates.
///
/// Failure responses are both 500 with a JSON error body, but with distinct
/// messages: a descriptive one for missing configuration, a generic one for
/// upstream failures. The upstream detail is logged so credential-exchange
/// diagnostics never leak to the caller.
pub async fn token(
    Extension(provider): Extension<Arc<ProviderConfig>>,
) -> (StatusCode, Json<Value>) {
    let Some((client_id, client_secret)) = provider.credentials() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": Error::Configuration.to_string() })),
        );
    };

    match spotify::auth::exchange_client_credentials(client_id, client_secret, &provider.token_url)
        .await
    {
        Ok(token) => (
            StatusCode::OK,
            Json(json!({ "access_token": token.access_token })),
        ),
        Err(e) => {
            warning!("Error fetching Spotify token: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to retrieve Spotify token." })),
            )
        }
    }
}
