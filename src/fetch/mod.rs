//! Resource fetching.
//!
//! One GET per call, redirects followed by hand so the full chain can be
//! reported, body read with an upper size bound. Every pipeline goes through
//! [`fetch_resource`].

mod redirects;
mod request;
mod types;

use std::time::Duration;

use log::debug;
use tokio::time::Instant;

use crate::config::MAX_REDIRECT_HOPS;
use crate::error_handling::{FetchError, FetchErrorKind};

pub use redirects::follow_redirects;
pub use request::flatten_headers;
pub use types::FetchResult;

/// Fetches `url`, following redirects, and reads the whole body.
///
/// # Arguments
///
/// * `client` - Shared HTTP client; must have its redirect policy disabled
/// * `url` - Absolute URL to fetch
/// * `timeout` - Budget for the whole operation, every redirect hop and the
///   body read included
/// * `max_body_bytes` - Largest body accepted
///
/// # Returns
///
/// The final response as a [`FetchResult`]. Error statuses (404, 500, ...)
/// are successful fetches.
///
/// # Errors
///
/// Returns a [`FetchError`] for transport failures: connection, TLS, timeout,
/// too many redirects, body read failures and bodies over `max_body_bytes`.
pub async fn fetch_resource(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    max_body_bytes: usize,
) -> Result<FetchResult, FetchError> {
    let started = Instant::now();
    let deadline = started + timeout;

    debug!("Fetching {url} (timeout {timeout:?})");
    let (response, redirect_chain) =
        follow_redirects(client, url, MAX_REDIRECT_HOPS, deadline).await?;
    let elapsed = started.elapsed();

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();
    let headers = flatten_headers(response.headers());
    let body = read_body_limited(response, max_body_bytes).await?;

    debug!(
        "Fetched {final_url} with status {status_code} ({} redirects, {} bytes, {elapsed:?})",
        redirect_chain.len(),
        body.len()
    );

    Ok(FetchResult {
        status_code,
        final_url,
        redirect_chain,
        headers,
        body,
        elapsed,
    })
}

/// Reads a response body, failing as soon as it grows past `max_bytes`.
///
/// A declared `Content-Length` over the limit is rejected before any of the
/// body is read.
async fn read_body_limited(
    mut response: reqwest::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, FetchError> {
    let too_large = || {
        FetchError::new(
            FetchErrorKind::BodyTooLarge,
            format!("response body exceeds {max_bytes} bytes"),
        )
    };

    let declared = response.content_length();
    if declared.is_some_and(|len| len > max_bytes as u64) {
        return Err(too_large());
    }

    let capacity = declared.map_or(0, |len| len as usize);
    let mut body = Vec::with_capacity(capacity);
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_bytes {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

#[cfg(test)]
mod tests;
