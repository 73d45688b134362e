use serde::{Deserialize, Serialize};

/// Success body of the token proxy endpoint, mirroring the single field the
/// upstream exchange is reduced to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// A bearer token held in the suggestion client's cache slot, together with
/// the bookkeeping needed to decide staleness.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub access_token: String,
    /// Assumed token lifetime in seconds.
    pub expires_in: u64,
    /// Unix timestamp at which the token was fetched.
    pub obtained_at: u64,
}

/// Transient input of one autocomplete search.
#[derive(Debug, Clone)]
pub struct SuggestionQuery {
    pub song_term: String,
    pub artist_filter: Option<String>,
}

/// The mapped, UI-ready shape of one search result.
///
/// `label` is the text shown in the dropdown, `value` the song name written
/// into the song field on selection, `artist` the name written into the
/// artist field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub label: String,
    pub value: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}
