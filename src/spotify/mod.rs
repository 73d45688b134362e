//! # Spotify Integration Module
//!
//! This module contains the outbound HTTP calls against Spotify's services.
//! It is the only place in the crate that talks to Spotify directly; the
//! `api` handlers and the suggestion client build on top of it.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **Credential Exchange**: POSTs `grant_type=client_credentials` with an
//!   HTTP Basic header built from the configured client ID and secret
//! - **Single Attempt**: No retry; the caller decides whether to re-invoke
//! - **Opaque Tokens**: Only the `access_token` field of the response is kept
//!
//! ### Search Module
//!
//! [`search`] - Implements track search against the Web API:
//! - **Bearer Authentication**: Presents the previously obtained token
//! - **Fixed Shape**: `type=track` with a caller-supplied result limit
//! - **Typed Responses**: Deserializes into [`crate::types::SearchResponse`]
//!
//! ## Error Handling
//!
//! Both modules return [`crate::error::Error`] variants carrying the failure
//! detail. Callers log that detail and degrade: the token endpoint answers
//! with a generic error body, the suggestion client with an empty list.
//! Outbound calls carry no timeout; a hung upstream hangs the triggering
//! operation.

pub mod auth;
pub mod search;
