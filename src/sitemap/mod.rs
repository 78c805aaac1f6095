//! Sitemap parsing.
//!
//! Turns the raw bytes of a sitemap response into a [`SitemapDocument`]:
//! - gzip is detected by magic bytes and inflated with an output bound
//! - the XML root decides between `urlset`, `sitemapindex` and unsupported
//! - `<loc>` entries are collected in document order
//!
//! Parsing is pure: the same bytes always give the same document.

mod decompress;
mod parser;
mod types;

pub use decompress::{gunzip_limited, is_gzip};
pub use parser::parse_document;
pub use types::SitemapDocument;

use crate::error_handling::SitemapError;

/// Parses a sitemap body, inflating it first when it is gzipped.
///
/// # Arguments
///
/// * `bytes` - The response body as received
/// * `might_be_compressed` - Whether to look for the gzip magic number at all
/// * `max_bytes` - Largest inflated document accepted
///
/// # Errors
///
/// Returns [`SitemapError::Decompression`] for a corrupt or oversized gzip
/// stream and [`SitemapError::Parse`] for malformed XML.
pub fn parse_sitemap(
    bytes: &[u8],
    might_be_compressed: bool,
    max_bytes: usize,
) -> Result<SitemapDocument, SitemapError> {
    if might_be_compressed && is_gzip(bytes) {
        log::debug!("Sitemap body is gzipped ({} bytes)", bytes.len());
        let inflated = gunzip_limited(bytes, max_bytes)?;
        return parse_document(&inflated);
    }
    parse_document(bytes)
}
