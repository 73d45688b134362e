//! Error taxonomy for the token proxy and the suggestion client.
//!
//! Every failure mode degrades to a neutral user-visible result: the proxy
//! endpoint answers with a generic JSON error body, and the suggestion client
//! answers with an empty suggestion list. The variants here carry the detail
//! that gets logged along the way.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required Spotify credentials are absent from the configuration.
    /// Surfaced to the caller with a descriptive message; fatal for the
    /// request, not for the process.
    #[error("Spotify credentials are not configured on the server.")]
    Configuration,

    /// The client-credentials exchange with the authorization endpoint
    /// failed. The detail is logged server-side and never returned to the
    /// caller.
    #[error("token exchange failed: {0}")]
    UpstreamAuth(String),

    /// The suggestion client could not obtain a usable token from the proxy
    /// endpoint. Logged and treated as "no token".
    #[error("token fetch failed: {0}")]
    TokenFetch(String),

    /// The track search call failed or returned an undecodable body. Logged
    /// and degraded to an empty suggestion list.
    #[error("search request failed: {0}")]
    SearchRequest(String),
}
