//! Error type definitions.
//!
//! This module defines the error types used throughout the application. Only
//! [`InitializationError`] and [`ValidationError`] ever reach a caller as a
//! failure; [`FetchError`] and [`SitemapError`] are folded into reports.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding or running the HTTP API.
    #[error("HTTP server error: {0}")]
    ServerError(#[from] std::io::Error),
}

/// Rejected request input. Raised before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty or only whitespace.
    #[error("URL must not be empty")]
    Empty,

    /// The input is longer than the accepted maximum.
    #[error("URL exceeds maximum length ({length} > {max})")]
    TooLong { length: usize, max: usize },

    /// The input could not be parsed as an absolute URL.
    #[error("invalid URL '{input}': {reason}")]
    Malformed { input: String, reason: String },

    /// The URL parsed but does not use http or https.
    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// The URL parsed but has no host to connect to.
    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// Coarse category of a transport failure.
///
/// All transport failures are reported to callers as one "connection error"
/// category; the kind only drives logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    Builder,
    Timeout,
    Connect,
    Dns,
    Tls,
    Redirect,
    TooManyRedirects,
    Request,
    Body,
    BodyTooLarge,
    Decode,
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Builder => "HTTP request builder error",
            FetchErrorKind::Timeout => "HTTP request timeout error",
            FetchErrorKind::Connect => "HTTP request connect error",
            FetchErrorKind::Dns => "DNS resolution error",
            FetchErrorKind::Tls => "TLS error",
            FetchErrorKind::Redirect => "HTTP request redirect error",
            FetchErrorKind::TooManyRedirects => "Too many redirects",
            FetchErrorKind::Request => "HTTP request error",
            FetchErrorKind::Body => "HTTP request body error",
            FetchErrorKind::BodyTooLarge => "Response body too large",
            FetchErrorKind::Decode => "HTTP request decode error",
            FetchErrorKind::Other => "HTTP request other error",
        }
    }
}

/// A transport-level failure of a single fetch.
///
/// `message` carries the full underlying error chain so reports can show the
/// real cause (refused connection, certificate problem, timeout, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Content failure while turning sitemap bytes into a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SitemapError {
    /// The body looked gzipped but could not be inflated.
    #[error("{0}")]
    Decompression(String),

    /// The (possibly inflated) body is not well-formed XML.
    #[error("{0}")]
    Parse(String),
}
