//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, input validation, transport
//!   and sitemap content failures
//! - Categorization of `reqwest` errors into coarse kinds for logging
//! - Rendering of full error-source chains for human-readable report messages
//!
//! Only initialization and validation errors are surfaced as failures. DNS,
//! transport and content errors are folded into the pipeline reports.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_chain_message};
pub use types::{FetchError, FetchErrorKind, InitializationError, SitemapError, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fetch_error_kinds_have_descriptions() {
        for kind in FetchErrorKind::iter() {
            assert!(!kind.as_str().is_empty());
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_fetch_error_displays_message_only() {
        let err = FetchError::new(FetchErrorKind::Timeout, "operation timed out");
        assert_eq!(err.to_string(), "operation timed out");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "URL must not be empty");
        assert_eq!(
            ValidationError::UnsupportedScheme("ftp".into()).to_string(),
            "unsupported URL scheme 'ftp' (expected http or https)"
        );
        assert_eq!(
            ValidationError::TooLong {
                length: 3000,
                max: 2048
            }
            .to_string(),
            "URL exceeds maximum length (3000 > 2048)"
        );
    }

    #[test]
    fn test_sitemap_error_displays_detail() {
        let err = SitemapError::Parse("no element found".into());
        assert_eq!(err.to_string(), "no element found");
    }
}
