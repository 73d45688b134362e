use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;

use crate::{
    config, spotify,
    types::{SuggestionQuery, SuggestionRecord},
    utils, warning,
};

use super::TokenCache;

/// Minimum song-term length before a search is issued. Below the threshold
/// the suggestion list is simply empty.
const MIN_TERM_LEN: usize = 2;

/// Maximum number of suggestions requested per search.
const SUGGESTION_LIMIT: u8 = 10;

/// Client-side suggestion component backing an autocomplete input.
///
/// Owns one HTTP client, one token cache slot, and a request sequence
/// counter. Constructed per session; dropping the client drops its cached
/// token. Every failure mode degrades to an empty suggestion list so the
/// input widget never sees an error.
pub struct SuggestionClient {
    http: Client,
    tokens: TokenCache,
    search_url: String,
    seq: AtomicU64,
}

impl SuggestionClient {
    /// Creates a client fetching tokens from `token_url` and searching
    /// against `search_url`.
    pub fn new(token_url: String, search_url: String) -> Self {
        SuggestionClient {
            http: Client::new(),
            tokens: TokenCache::new(token_url),
            search_url,
            seq: AtomicU64::new(0),
        }
    }

    /// Creates a client pointed at the locally served token proxy and the
    /// configured Spotify API.
    pub fn from_env() -> Self {
        let token_url = format!("http://{}/api/spotify-token", config::server_addr());
        let search_url = format!("{}/search", config::spotify_apiurl());
        Self::new(token_url, search_url)
    }

    /// Produces suggestion records for one autocomplete keystroke.
    ///
    /// Invoked once per qualifying input change; calls may overlap when the
    /// user types quickly. The pipeline:
    ///
    /// 1. Song terms below the minimum length yield an empty list without
    ///    any network traffic.
    /// 2. A token is obtained from the cache. No token means a degraded but
    ///    valid outcome: empty list, no search call.
    /// 3. The query text is the song term, with an `artist:<filter>`
    ///    qualifier appended when an artist filter is present. Result type
    ///    and limit are fixed.
    /// 4. Result items map to records via the first-artist rule.
    ///
    /// Each call takes a sequence number before sending; a response that
    /// comes back after a newer call has started is discarded, so a slow
    /// response for an earlier keystroke cannot overwrite fresher
    /// suggestions. Search failures are logged and yield an empty list.
    pub async fn suggest(&self, query: &SuggestionQuery) -> Vec<SuggestionRecord> {
        if query.song_term.chars().count() < MIN_TERM_LEN {
            return Vec::new();
        }

        let Some(token) = self.tokens.get(&self.http).await else {
            return Vec::new();
        };

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let q = utils::build_search_query(&query.song_term, query.artist_filter.as_deref());

        let tracks = match spotify::search::search_tracks(
            &self.http,
            &self.search_url,
            &token,
            &q,
            SUGGESTION_LIMIT,
        )
        .await
        {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Track search failed: {}", e);
                return Vec::new();
            }
        };

        // Superseded by a later keystroke while in flight.
        if self.seq.load(Ordering::SeqCst) != seq {
            return Vec::new();
        }

        tracks.iter().filter_map(utils::track_to_suggestion).collect()
    }
}
