//! HTTP redirect chain resolution.
//!
//! This module handles following redirect chains manually to track the full path
//! from initial URL to final destination.

use reqwest::Url;
use tokio::time::Instant;

use crate::error_handling::{FetchError, FetchErrorKind};
use crate::fetch::request::RequestHeaders;

/// Follows redirects from `start_url` until a non-redirect response arrives.
///
/// Every hop is a full GET with the standard browser headers. Each request is
/// given whatever is left of the overall `deadline`, so the timeout bounds the
/// whole chain rather than each hop.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `start_url` - The initial URL to start from
/// * `max_hops` - Maximum number of redirects to follow
/// * `deadline` - Point in time by which the final response must be complete
///
/// # Returns
///
/// A tuple of (final_response, redirect_chain) where `redirect_chain` holds
/// every URL that answered with a redirect, in visit order. The final URL is
/// not part of the chain; it is the URL of the returned response.
///
/// # Errors
///
/// Returns a [`FetchError`] if a request fails, the deadline passes, a
/// `Location` header cannot be resolved, or more than `max_hops` redirects
/// are encountered.
pub async fn follow_redirects(
    client: &reqwest::Client,
    start_url: &str,
    max_hops: usize,
    deadline: Instant,
) -> Result<(reqwest::Response, Vec<String>), FetchError> {
    let mut current = Url::parse(start_url).map_err(|e| {
        FetchError::new(
            FetchErrorKind::Builder,
            format!("invalid URL '{start_url}': {e}"),
        )
    })?;
    let mut chain: Vec<String> = Vec::new();

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(FetchError::new(
                FetchErrorKind::Timeout,
                format!("operation timed out while fetching {current}"),
            ));
        }

        let response = RequestHeaders::apply_to_request_builder(client.get(current.clone()))
            .timeout(remaining)
            .send()
            .await?;

        let Some(next) = redirect_target(&response, &current)? else {
            return Ok((response, chain));
        };

        chain.push(current.to_string());
        if chain.len() > max_hops {
            return Err(FetchError::new(
                FetchErrorKind::TooManyRedirects,
                format!("too many redirects (more than {max_hops}) starting at {start_url}"),
            ));
        }
        log::debug!("Following {} redirect {} -> {}", response.status(), current, next);
        current = next;
    }
}

/// Returns where a redirect response points to, or `None` for a response
/// that ends the chain.
///
/// Relative locations are resolved against `current`.
fn redirect_target(response: &reqwest::Response, current: &Url) -> Result<Option<Url>, FetchError> {
    // Check if status is a redirect (301, 302, 303, 307, 308)
    if !matches!(response.status().as_u16(), 301 | 302 | 303 | 307 | 308) {
        return Ok(None);
    }

    let Some(location) = response.headers().get(reqwest::header::LOCATION) else {
        // Redirect status but no Location header: the response itself is final
        log::warn!(
            "Redirect status {} for {} but no Location header",
            response.status().as_u16(),
            current
        );
        return Ok(None);
    };

    let location = String::from_utf8_lossy(location.as_bytes());
    current.join(location.trim()).map(Some).map_err(|e| {
        FetchError::new(
            FetchErrorKind::Redirect,
            format!("invalid redirect location '{location}' from {current}: {e}"),
        )
    })
}
