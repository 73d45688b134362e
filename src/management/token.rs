use chrono::Utc;
use reqwest::{Client, header::CONTENT_TYPE};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{error::Error, types::CachedToken, warning};

/// Seconds before nominal expiry at which a cached token counts as stale.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Assumed token lifetime. The proxy response only carries `access_token`,
/// so the cache falls back to Spotify's client-credentials lifetime of one
/// hour.
const DEFAULT_TTL_SECS: u64 = 3600;

/// Client-side cache for the bearer token obtained from the token proxy.
///
/// Holds at most one token at a time: the slot is either empty or populated.
/// A token is served from the slot until it goes stale, then refetched. A
/// failed fetch leaves the slot empty so the next call retries.
///
/// The slot lives inside the cache instance rather than in module state, so
/// each client session gets its own lifecycle and tests stay isolated. The
/// async mutex is held across the fetch, which also means concurrent callers
/// racing on an empty slot wait for the one in-flight fetch instead of
/// stampeding the proxy.
pub struct TokenCache {
    token_url: String,
    ttl: u64,
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(token_url: String) -> Self {
        Self::with_ttl(token_url, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with an explicit token lifetime in seconds. A TTL at
    /// or below the staleness buffer makes every call refetch.
    pub fn with_ttl(token_url: String, ttl: u64) -> Self {
        TokenCache {
            token_url,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns a usable bearer token, fetching one when the slot is empty or
    /// stale.
    ///
    /// Returns `None` when no token can be obtained; the failure is logged
    /// and the slot stays empty. Callers treat this as a degraded state, not
    /// an error.
    pub async fn get(&self, client: &Client) -> Option<String> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if !is_expired(cached) {
                return Some(cached.access_token.clone());
            }
        }

        match self.fetch(client).await {
            Ok(token) => {
                let access_token = token.access_token.clone();
                *slot = Some(token);
                Some(access_token)
            }
            Err(e) => {
                warning!("Error fetching Spotify token: {}", e);
                *slot = None;
                None
            }
        }
    }

    /// Fetches a fresh token from the proxy endpoint.
    ///
    /// Defensive parsing: a non-2xx status, a non-JSON content type, an
    /// `error` field in the body, or a missing `access_token` all fail the
    /// fetch.
    async fn fetch(&self, client: &Client) -> Result<CachedToken, Error> {
        let res = client
            .get(&self.token_url)
            .send()
            .await
            .map_err(|e| Error::TokenFetch(e.to_string()))?;

        let status = res.status();
        let is_json = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);

        if !status.is_success() {
            let detail = if is_json {
                res.json::<Value>()
                    .await
                    .ok()
                    .and_then(|v| v["error"].as_str().map(str::to_string))
                    .unwrap_or_else(|| status.to_string())
            } else {
                status.to_string()
            };
            return Err(Error::TokenFetch(detail));
        }

        if !is_json {
            return Err(Error::TokenFetch(
                "token endpoint returned a non-JSON body".to_string(),
            ));
        }

        let json: Value = res
            .json()
            .await
            .map_err(|e| Error::TokenFetch(e.to_string()))?;

        if let Some(err) = json["error"].as_str() {
            return Err(Error::TokenFetch(err.to_string()));
        }

        match json["access_token"].as_str() {
            Some(token) if !token.is_empty() => Ok(CachedToken {
                access_token: token.to_string(),
                expires_in: self.ttl,
                obtained_at: Utc::now().timestamp() as u64,
            }),
            _ => Err(Error::TokenFetch(
                "token endpoint response is missing access_token".to_string(),
            )),
        }
    }
}

fn is_expired(token: &CachedToken) -> bool {
    let now = Utc::now().timestamp() as u64;
    now >= (token.obtained_at + token.expires_in).saturating_sub(EXPIRY_BUFFER_SECS)
}
