//! Sitemap discovery and sitemap URL listing.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use strum_macros::Display as DisplayMacro;

use super::Inspector;
use crate::app::{normalize_domain, sitemap_url_for};
use crate::error_handling::{FetchError, SitemapError};
use crate::fetch::{fetch_resource, FetchResult};
use crate::sitemap::{parse_sitemap, SitemapDocument};

/// Outcome of [`Inspector::check_sitemap`].
///
/// Displayed (and serialized) as the status strings clients match on.
#[derive(Debug, Clone, PartialEq, Eq, DisplayMacro)]
pub enum SitemapStatus {
    /// A parsed `urlset` (`urls`) or `sitemapindex` (`sitemap_files`).
    #[strum(serialize = "Found")]
    Found {
        urls: Vec<Option<String>>,
        sitemap_files: Vec<Option<String>>,
    },
    /// The server answered with a status of 400 or above.
    #[strum(serialize = "Not Found")]
    NotFound,
    #[strum(serialize = "Parse Error")]
    ParseError,
    #[strum(serialize = "Decompression Failed")]
    DecompressionFailed,
    /// Well-formed XML, but neither `urlset` nor `sitemapindex`.
    #[strum(serialize = "Unsupported format")]
    UnsupportedFormat,
    /// The request itself failed.
    #[strum(serialize = "Error")]
    Error,
}

/// Outcome of [`Inspector::fetch_sitemap_urls`].
#[derive(Debug, Clone, PartialEq, Eq, DisplayMacro)]
pub enum SitemapUrlsStatus {
    /// Page URLs of the sitemap. Empty for anything but a `urlset`.
    #[strum(serialize = "Parsed")]
    Parsed(Vec<Option<String>>),
    #[strum(serialize = "Not Found")]
    NotFound,
    #[strum(serialize = "Parse Error")]
    ParseError,
    #[strum(serialize = "Decompression Failed")]
    DecompressionFailed,
    #[strum(serialize = "Error")]
    Error,
}

/// Result of [`Inspector::check_sitemap`].
///
/// Serializes flat, as `{sitemap_url, sitemap_status, http_status,
/// sitemap_files, urls, message}`, with empty `<loc>` entries dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapReport {
    pub sitemap_url: String,
    pub status: SitemapStatus,
    pub http_status: Option<u16>,
    pub message: String,
}

impl SitemapReport {
    pub fn urls(&self) -> Vec<&str> {
        match &self.status {
            SitemapStatus::Found { urls, .. } => present(urls),
            _ => Vec::new(),
        }
    }

    pub fn sitemap_files(&self) -> Vec<&str> {
        match &self.status {
            SitemapStatus::Found { sitemap_files, .. } => present(sitemap_files),
            _ => Vec::new(),
        }
    }
}

impl Serialize for SitemapReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SitemapReport", 6)?;
        state.serialize_field("sitemap_url", &self.sitemap_url)?;
        state.serialize_field("sitemap_status", &self.status.to_string())?;
        state.serialize_field("http_status", &self.http_status)?;
        state.serialize_field("sitemap_files", &self.sitemap_files())?;
        state.serialize_field("urls", &self.urls())?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

/// Result of [`Inspector::fetch_sitemap_urls`].
///
/// Serializes flat, as `{sitemap_url, sitemap_status, http_status, urls,
/// message}`, with empty `<loc>` entries dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapUrlsReport {
    pub sitemap_url: String,
    pub status: SitemapUrlsStatus,
    pub http_status: Option<u16>,
    pub message: String,
}

impl SitemapUrlsReport {
    pub fn urls(&self) -> Vec<&str> {
        match &self.status {
            SitemapUrlsStatus::Parsed(urls) => present(urls),
            _ => Vec::new(),
        }
    }
}

impl Serialize for SitemapUrlsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SitemapUrlsReport", 5)?;
        state.serialize_field("sitemap_url", &self.sitemap_url)?;
        state.serialize_field("sitemap_status", &self.status.to_string())?;
        state.serialize_field("http_status", &self.http_status)?;
        state.serialize_field("urls", &self.urls())?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

/// Non-empty `<loc>` values; these are what reports list and count.
fn present(entries: &[Option<String>]) -> Vec<&str> {
    entries.iter().filter_map(Option::as_deref).collect()
}

impl Inspector {
    /// Looks for `<domain>/sitemap.xml` and reports what it contains.
    ///
    /// The input may be a bare domain or a full URL; a missing scheme becomes
    /// `https://` and a trailing slash is dropped before `/sitemap.xml` is
    /// appended.
    pub async fn check_sitemap(&self, domain: &str) -> SitemapReport {
        let sitemap_url = sitemap_url_for(&normalize_domain(domain));
        let fetched = self.fetch_sitemap(&sitemap_url).await;

        let (status, http_status, message) = match fetched {
            Err(e) => (SitemapStatus::Error, None, format!("Request error: {e}")),
            Ok(response) if response.status_code >= 400 => (
                SitemapStatus::NotFound,
                Some(response.status_code),
                format!("Sitemap returned status {}.", response.status_code),
            ),
            Ok(response) => {
                let code = response.status_code;
                let (status, message) = self.classify_sitemap(&response, code);
                (status, Some(code), message)
            }
        };

        log::debug!("Sitemap check for {sitemap_url}: {status} ({message})");
        SitemapReport {
            sitemap_url,
            status,
            http_status,
            message,
        }
    }

    /// Fetches one sitemap file and lists its page URLs.
    ///
    /// `sitemap_url` is used exactly as given. Gzipped files are recognised
    /// by their magic bytes whatever their name. A sitemap index is reported
    /// as parsed with no URLs: nested sitemaps are not fetched.
    pub async fn fetch_sitemap_urls(&self, sitemap_url: &str) -> SitemapUrlsReport {
        let fetched = self.fetch_sitemap(sitemap_url).await;

        let (status, http_status, message) = match fetched {
            Err(e) => (SitemapUrlsStatus::Error, None, format!("Request error: {e}")),
            Ok(response) if response.status_code >= 400 => (
                SitemapUrlsStatus::NotFound,
                Some(response.status_code),
                format!("Sitemap file returned status {}.", response.status_code),
            ),
            Ok(response) => {
                let (status, message) = self.list_sitemap_urls(&response);
                (status, Some(response.status_code), message)
            }
        };

        log::debug!("Sitemap URL fetch for {sitemap_url}: {status} ({message})");
        SitemapUrlsReport {
            sitemap_url: sitemap_url.to_string(),
            status,
            http_status,
            message,
        }
    }

    async fn fetch_sitemap(&self, url: &str) -> Result<FetchResult, FetchError> {
        fetch_resource(
            &self.client,
            url,
            self.settings.sitemap_timeout,
            self.settings.max_body_bytes,
        )
        .await
        .inspect_err(|e| log::warn!("Sitemap request for {url} failed ({}): {e}", e.kind))
    }

    fn classify_sitemap(&self, response: &FetchResult, code: u16) -> (SitemapStatus, String) {
        let found = format!("Sitemap is available (status {code}).");
        match parse_sitemap(&response.body, true, self.settings.max_body_bytes) {
            Ok(SitemapDocument::UrlSet(urls)) => {
                let message = format!(
                    "{found} This is a <urlset> sitemap. Found {} URLs.",
                    present(&urls).len()
                );
                let status = SitemapStatus::Found {
                    urls,
                    sitemap_files: Vec::new(),
                };
                (status, message)
            }
            Ok(SitemapDocument::SitemapIndex(sitemap_files)) => {
                let message = format!(
                    "{found} Found {} nested sitemap files.",
                    present(&sitemap_files).len()
                );
                let status = SitemapStatus::Found {
                    urls: Vec::new(),
                    sitemap_files,
                };
                (status, message)
            }
            Ok(SitemapDocument::Unsupported { root }) => (
                SitemapStatus::UnsupportedFormat,
                format!("Sitemap XML has unsupported root element <{root}>."),
            ),
            Err(e) => content_failure(
                e,
                SitemapStatus::ParseError,
                SitemapStatus::DecompressionFailed,
            ),
        }
    }

    fn list_sitemap_urls(&self, response: &FetchResult) -> (SitemapUrlsStatus, String) {
        match parse_sitemap(&response.body, true, self.settings.max_body_bytes) {
            Ok(SitemapDocument::UrlSet(urls)) => {
                let message = format!("Parsed {} URLs from sitemap.", present(&urls).len());
                (SitemapUrlsStatus::Parsed(urls), message)
            }
            Ok(SitemapDocument::SitemapIndex(sitemap_files)) => (
                SitemapUrlsStatus::Parsed(Vec::new()),
                format!(
                    "Parsed 0 URLs from sitemap. This is a sitemap index with {} nested sitemap files; nested sitemaps are not expanded.",
                    present(&sitemap_files).len()
                ),
            ),
            Ok(SitemapDocument::Unsupported { root }) => (
                SitemapUrlsStatus::Parsed(Vec::new()),
                format!("Parsed 0 URLs from sitemap. Root element <{root}> is not a <urlset>."),
            ),
            Err(e) => content_failure(
                e,
                SitemapUrlsStatus::ParseError,
                SitemapUrlsStatus::DecompressionFailed,
            ),
        }
    }
}

/// Maps a content failure onto the pipeline's status and message.
fn content_failure<S>(error: SitemapError, parse_error: S, decompression_failed: S) -> (S, String) {
    log::warn!("Sitemap content could not be read: {error}");
    match error {
        SitemapError::Parse(detail) => {
            (parse_error, format!("Failed to parse sitemap XML: {detail}"))
        }
        SitemapError::Decompression(detail) => (
            decompression_failed,
            format!("Failed to decompress gzip sitemap: {detail}"),
        ),
    }
}
