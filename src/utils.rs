use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{SuggestionRecord, Track};

/// Builds the `Authorization` header value for the HTTP Basic
/// client-credentials exchange: `Basic base64(id:secret)`.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let auth_string = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", auth_string)
}

/// Builds the search query text sent to the Spotify search endpoint.
///
/// The song term stands alone; a non-empty artist filter appends a structured
/// `artist:<value>` qualifier, space-joined.
pub fn build_search_query(song_term: &str, artist_filter: Option<&str>) -> String {
    match artist_filter {
        Some(artist) if !artist.is_empty() => format!("{} artist:{}", song_term, artist),
        _ => song_term.to_string(),
    }
}

/// Maps one search result track to a suggestion record.
///
/// The display label is `"<artist> - <track>"` using the first artist in the
/// item's artist list. Tracks without any artist are skipped rather than
/// rendered half-empty.
pub fn track_to_suggestion(track: &Track) -> Option<SuggestionRecord> {
    let artist = track.artists.first()?;
    Some(SuggestionRecord {
        label: format!("{} - {}", artist.name, track.name),
        value: track.name.clone(),
        artist: artist.name.clone(),
    })
}
