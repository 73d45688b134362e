use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::{error::Error, types::TokenResponse, utils};

/// Exchanges service credentials for a bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant: a single HTTP POST to the
/// token endpoint with `Authorization: Basic base64(id:secret)` and the
/// form-encoded body `grant_type=client_credentials`. The application
/// authenticates as itself; no user is involved.
///
/// # Arguments
///
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
/// * `token_url` - Token exchange endpoint to POST to
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - The access token extracted from the response body
/// - `Err(Error::UpstreamAuth)` - Network error, non-2xx status, or a body
///   without an `access_token` field
///
/// # Retry Behavior
///
/// One attempt per invocation. The caller is responsible for re-invoking on
/// failure.
pub async fn exchange_client_credentials(
    client_id: &str,
    client_secret: &str,
    token_url: &str,
) -> Result<TokenResponse, Error> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(client_id, client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::UpstreamAuth(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::UpstreamAuth(format!("{}: {}", status, body)));
    }

    let json: Value = res
        .json()
        .await
        .map_err(|e| Error::UpstreamAuth(e.to_string()))?;

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(TokenResponse {
            access_token: token.to_string(),
        }),
        _ => Err(Error::UpstreamAuth(
            "response body is missing access_token".to_string(),
        )),
    }
}
