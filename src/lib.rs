//! Spotify Song Suggestion Library
//!
//! This library provides a thin credential proxy and a search-suggestion
//! client for song autocomplete forms. A server-side endpoint exchanges
//! configured Spotify service credentials for a bearer token via the
//! client-credentials grant; a client-side component caches that token and
//! uses it to query the Spotify search API, mapping raw track results into
//! suggestion records for an autocomplete UI.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the token proxy server
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy for the proxy and the suggestion client
//! - `management` - Client-side token cache and suggestion client
//! - `server` - HTTP server serving the token proxy endpoints
//! - `spotify` - Spotify Web API calls (token exchange, track search)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tunehint::{management::SuggestionClient, types::SuggestionQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SuggestionClient::from_env();
//!     let suggestions = client
//!         .suggest(&SuggestionQuery {
//!             song_term: "Yesterday".to_string(),
//!             artist_filter: Some("Beatles".to_string()),
//!         })
//!         .await;
//!     for s in suggestions {
//!         println!("{}", s.label);
//!     }
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting token proxy...");
/// info!("Serving on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Token proxy ready on {}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as a malformed listen address.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// recoverable issues, such as a failed upstream token exchange whose detail
/// must be logged but not returned to the caller.
///
/// # Example
///
/// ```
/// warning!("Error fetching Spotify token: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
