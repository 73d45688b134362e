//! Configuration management for the song suggestion service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the Spotify service credentials,
//! API endpoints, and the proxy server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoints and server address)
//!
//! The credential pair is deliberately optional at load time: its absence is
//! surfaced as a configuration error when a token is requested, not as a
//! startup failure.

use std::{env, path::PathBuf, sync::Arc};

use crate::Res;

/// Default Spotify token exchange endpoint.
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default Spotify Web API base URL.
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
/// Default listen address for the token proxy server.
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `tunehint/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tunehint/.env`
/// - macOS: `~/Library/Application Support/tunehint/.env`
/// - Windows: `%LOCALAPPDATA%/tunehint/.env`
///
/// A missing `.env` file is not an error: credentials may be provided through
/// real environment variables, and their absence is reported per request.
///
/// # Errors
///
/// This function will return an error if the parent directory cannot be
/// created.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunehint/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the listen address for the token proxy server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:3000` when unset.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID, if configured.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains the
/// client ID obtained when registering the application with Spotify's
/// developer platform. Returns `None` when the variable is unset or empty;
/// the token endpoint turns that into a configuration error response.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_CLIENT_ID").ok().filter(|v| !v.is_empty())
}

/// Returns the Spotify API client secret, if configured.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable. Returns `None`
/// when the variable is unset or empty.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs,
/// responses, or version control. It never leaves the server process.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_CLIENT_SECRET")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Returns the Spotify token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back
/// to Spotify's production token endpoint. The override exists so tests and
/// staging deployments can point the exchange at a different host.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to
/// Spotify's production API. This is used for the track search endpoint.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Server-side configuration for the token proxy endpoint.
///
/// Read from the environment once at startup and injected into the axum
/// router as shared state. The credential halves stay optional here; the
/// presence check happens per request so that a misconfigured deployment
/// still boots and reports the problem through its HTTP responses.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub token_url: String,
}

impl ProviderConfig {
    /// Builds the provider configuration from the process environment.
    pub fn from_env() -> Self {
        ProviderConfig {
            client_id: spotify_client_id(),
            client_secret: spotify_client_secret(),
            token_url: spotify_apitoken_url(),
        }
    }

    /// Returns both credential halves, or `None` if either is missing.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }

    /// Wraps the configuration for sharing across request handlers.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
