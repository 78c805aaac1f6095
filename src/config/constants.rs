//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and request defaults.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most A lookups complete in well under a second; 3s fails fast on dead resolvers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per query before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// HTTP timeout for domain liveness checks, in seconds
pub const DOMAIN_TIMEOUT_SECS: u64 = 5;
/// HTTP timeout for page inspection, in seconds
pub const PAGE_TIMEOUT_SECS: u64 = 15;
/// HTTP timeout for sitemap retrieval, in seconds
/// Sitemaps can be large and are often generated on the fly
pub const SITEMAP_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 20;

// Response and body size limits
/// Maximum response body size in bytes (50MB)
/// Matches the uncompressed size cap of the sitemap protocol; also applied to
/// gunzipped sitemap output to stop decompression bombs
pub const MAX_RESPONSE_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Path appended to a domain when looking for its sitemap.
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Default address the HTTP API binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Fallback User-Agent strings.
///
/// One of these is picked at random at startup unless `--user-agent` is given.
/// Keeping several current desktop and mobile browsers avoids every instance
/// presenting the same fingerprint.
pub const FALLBACK_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.118 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.118 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.118 Safari/537.36",
    "Mozilla/5.0 (Linux; Android 11; SM-G981B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.118 Mobile Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Default User-Agent string, used when a deterministic value is needed.
pub const DEFAULT_USER_AGENT: &str = FALLBACK_USER_AGENTS[0];
