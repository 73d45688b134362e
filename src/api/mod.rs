//! # API Module
//!
//! This module provides the HTTP endpoints served by the token proxy. It is
//! the boundary behind which the Spotify client secret stays: browsers and
//! other clients only ever see the short-lived bearer token.
//!
//! ## Endpoints
//!
//! ### Token Proxy
//!
//! - [`token`] - `GET /api/spotify-token`. Exchanges the configured service
//!   credentials for a bearer token via the client-credentials grant and
//!   returns `{"access_token": "..."}`. Missing credentials and upstream
//!   failures both answer 500 with a JSON error body; upstream failure
//!   detail is logged, never returned.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information for monitoring systems and load balancers.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into the router by
//! [`crate::server::app`]; the provider configuration is shared through an
//! axum `Extension` so handlers stay testable without touching the process
//! environment.

mod health;
mod token;

pub use health::health;
pub use token::token;
