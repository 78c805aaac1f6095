//! Gzip detection and bounded decompression.

use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error_handling::SitemapError;

/// The two magic bytes every gzip stream starts with.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true when `bytes` starts with the gzip magic number.
///
/// The file name and `Content-Type` are ignored: servers label `.xml.gz`
/// files inconsistently, and a plain document never starts with these bytes.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Inflates a gzip stream, refusing output larger than `max_bytes`.
///
/// Every member of a multi-member stream is inflated, as `gzip -d` does for
/// concatenated `.gz` files.
///
/// # Errors
///
/// Returns [`SitemapError::Decompression`] if the stream is corrupt or
/// truncated, or inflates past `max_bytes`.
pub fn gunzip_limited(bytes: &[u8], max_bytes: usize) -> Result<Vec<u8>, SitemapError> {
    // Read one byte past the limit so an oversized stream can be told apart
    // from one that is exactly at it
    let limit = (max_bytes as u64).saturating_add(1);
    let mut decoder = MultiGzDecoder::new(bytes).take(limit);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| SitemapError::Decompression(e.to_string()))?;

    if inflated.len() > max_bytes {
        return Err(SitemapError::Decompression(format!(
            "decompressed sitemap exceeds {max_bytes} bytes"
        )));
    }
    Ok(inflated)
}
