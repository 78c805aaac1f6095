//! URL validation and normalization utilities.

use log::warn;

use crate::config::{MAX_URL_LENGTH, SITEMAP_PATH};
use crate::error_handling::ValidationError;

/// Normalizes a domain or URL given by a caller.
///
/// Adds an `https://` prefix when the input has no `http://` or `https://`
/// scheme. Nothing else is rewritten: the result is what gets fetched and
/// echoed back as `fixed_domain`.
pub fn normalize_domain(input: &str) -> String {
    let trimmed = input.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Extracts the bare hostname to resolve from a normalized domain URL.
///
/// Scheme, port, path and trailing slash are dropped. Falls back to plain
/// prefix stripping when the input does not parse as a URL, so that the DNS
/// step still reports on whatever the caller typed.
pub fn host_for_lookup(normalized: &str) -> String {
    if let Ok(parsed) = url::Url::parse(normalized) {
        if let Some(host) = parsed.host_str() {
            return host
                .trim_start_matches('[')
                .trim_end_matches(']')
                .to_string();
        }
    }

    let without_scheme = normalized
        .strip_prefix("https://")
        .or_else(|| normalized.strip_prefix("http://"))
        .unwrap_or(normalized);
    without_scheme.trim_end_matches('/').to_string()
}

/// Builds the conventional sitemap location for a normalized domain URL.
pub fn sitemap_url_for(normalized: &str) -> String {
    format!("{}{}", normalized.trim_end_matches('/'), SITEMAP_PATH)
}

/// Validates a page URL supplied for inspection.
///
/// The URL must be absolute, use http or https, have a host, and be no longer
/// than `MAX_URL_LENGTH`. Unlike [`normalize_domain`], no scheme is added:
/// a page URL without one is rejected.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing why the input was rejected.
pub fn validate_page_url(input: &str) -> Result<url::Url, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    // Check length before parsing so huge inputs are never parsed
    if trimmed.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            trimmed.len(),
            MAX_URL_LENGTH,
            truncate_for_log(trimmed)
        );
        return Err(ValidationError::TooLong {
            length: trimmed.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| {
        warn!("Rejecting invalid URL: {trimmed}");
        ValidationError::Malformed {
            input: trimmed.to_string(),
            reason: e.to_string(),
        }
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            warn!("Rejecting unsupported scheme for URL: {trimmed}");
            return Err(ValidationError::UnsupportedScheme(other.to_string()));
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingHost(trimmed.to_string()));
    }

    Ok(parsed)
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn truncate_for_log(input: &str) -> &str {
    let mut end = 50.min(input.len());
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}
