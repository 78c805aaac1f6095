//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{InspectorSettings, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from settings
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - Redirects disabled, so the fetcher can record every hop itself
/// - Rustls TLS backend (no native TLS)
///
/// No overall timeout is set here: each pipeline applies its own timeout
/// per request. `reqwest::Client` is internally reference-counted and safe to
/// share between concurrent requests.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(settings: &InspectorSettings) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(settings.user_agent.clone())
        .build()?;
    Ok(client)
}
