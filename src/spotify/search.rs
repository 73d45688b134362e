use reqwest::Client;

use crate::{
    error::Error,
    types::{SearchResponse, Track},
};

/// Searches the Spotify catalog for tracks matching a query.
///
/// Issues a GET against the search endpoint with `Authorization: Bearer
/// <token>` and the fixed result type `track`. The query text is passed
/// through as-is; artist qualifiers are the caller's concern (see
/// [`crate::utils::build_search_query`]).
///
/// # Arguments
///
/// * `client` - Shared HTTP client to issue the request on
/// * `search_url` - Search endpoint, e.g. `https://api.spotify.com/v1/search`
/// * `token` - Valid bearer token for the Web API
/// * `query` - Search query text
/// * `limit` - Maximum number of result items to request
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - The result items, possibly empty
/// - `Err(Error::SearchRequest)` - Network error, non-2xx status, or a body
///   that does not decode into the expected `tracks.items` shape
pub async fn search_tracks(
    client: &Client,
    search_url: &str,
    token: &str,
    query: &str,
    limit: u8,
) -> Result<Vec<Track>, Error> {
    let limit = limit.to_string();
    let res = client
        .get(search_url)
        .bearer_auth(token)
        .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
        .send()
        .await
        .map_err(|e| Error::SearchRequest(e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::SearchRequest(e.to_string()))?;

    let parsed = res
        .json::<SearchResponse>()
        .await
        .map_err(|e| Error::SearchRequest(e.to_string()))?;

    Ok(parsed.tracks.items)
}
