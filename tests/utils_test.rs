use tunehint::types::{Track, TrackArtist};
use tunehint::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, artist_names: &[&str]) -> Track {
    Track {
        name: name.to_string(),
        artists: artist_names
            .iter()
            .map(|n| TrackArtist {
                name: n.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_basic_auth_header() {
    // Known vector: base64("abc:xyz") == "YWJjOnh5eg=="
    let header = basic_auth_header("abc", "xyz");
    assert_eq!(header, "Basic YWJjOnh5eg==");

    // Standard alphabet with padding
    let header = basic_auth_header("client-id", "client-secret");
    assert!(header.starts_with("Basic "));
    let encoded = header.trim_start_matches("Basic ");
    assert!(
        encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
    );
}

#[test]
fn test_build_search_query_with_artist() {
    let query = build_search_query("Yesterday", Some("Beatles"));
    assert_eq!(query, "Yesterday artist:Beatles");
}

#[test]
fn test_build_search_query_without_artist() {
    let query = build_search_query("Yesterday", None);
    assert_eq!(query, "Yesterday");

    // An empty filter behaves like no filter
    let query = build_search_query("Yesterday", Some(""));
    assert_eq!(query, "Yesterday");
}

#[test]
fn test_track_to_suggestion_uses_first_artist() {
    let track = create_test_track("Yesterday", &["The Beatles", "Some Cover Band"]);
    let record = track_to_suggestion(&track).unwrap();

    assert_eq!(record.label, "The Beatles - Yesterday");
    assert_eq!(record.value, "Yesterday");
    assert_eq!(record.artist, "The Beatles");
}

#[test]
fn test_track_to_suggestion_skips_artistless_tracks() {
    let track = create_test_track("Orphan Song", &[]);
    assert!(track_to_suggestion(&track).is_none());
}
