//! Error categorization.
//!
//! This module turns `reqwest` failures into [`FetchError`] values, keeping the
//! whole error-source chain in the message and picking a [`FetchErrorKind`].

use std::error::Error as StdError;

use super::types::{FetchError, FetchErrorKind};

/// Categorizes a `reqwest::Error` into a [`FetchErrorKind`].
///
/// Starts from reqwest's own classification, then refines connect/request
/// errors by looking for DNS and TLS patterns in the error chain, since
/// reqwest reports both as plain connect errors.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    let base = if error.is_builder() {
        FetchErrorKind::Builder
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_request() {
        FetchErrorKind::Request
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else {
        FetchErrorKind::Other
    };

    if base != FetchErrorKind::Connect && base != FetchErrorKind::Request {
        return base;
    }

    let chain = error_chain_message(error).to_lowercase();
    if chain.contains("dns")
        || chain.contains("name resolution")
        || chain.contains("failed to lookup address")
        || chain.contains("failed to resolve")
    {
        FetchErrorKind::Dns
    } else if chain.contains("tls")
        || chain.contains("ssl")
        || chain.contains("certificate")
        || chain.contains("handshake")
    {
        FetchErrorKind::Tls
    } else if chain.contains("timed out") || chain.contains("timeout") {
        FetchErrorKind::Timeout
    } else {
        base
    }
}

/// Renders an error followed by all of its sources, separated by `": "`.
///
/// Top-level reqwest messages ("error sending request for url ...") rarely
/// say what went wrong; the cause is a few sources down.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::new(categorize_reqwest_error(&error), error_chain_message(&error))
    }
}
