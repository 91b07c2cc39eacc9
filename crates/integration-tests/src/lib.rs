//! Integration tests for Crescendo.
//!
//! # Running Tests
//!
//! The tests drive a live server over HTTP, so they are `#[ignore]`d by
//! default. To run them:
//!
//! ```bash
//! # Start MongoDB, then the API
//! cargo run -p crescendo-api
//!
//! # Run integration tests
//! cargo test -p crescendo-integration-tests -- --ignored
//! ```
//!
//! Set `CRESCENDO_BASE_URL` to point the tests at a non-default server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CRESCENDO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client for the tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// A username that will not collide with any other test run.
#[must_use]
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
