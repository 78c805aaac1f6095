//! Main application modules.
//!
//! This module provides utilities for input normalization and validation, and
//! shutdown handling used by the HTTP API.

pub mod shutdown;
pub mod url;

// Re-export public API
pub use shutdown::shutdown_signal;
pub use url::{host_for_lookup, normalize_domain, sitemap_url_for, validate_page_url};
