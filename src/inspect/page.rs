//! Page inspection.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Inspector;
use crate::app::validate_page_url;
use crate::error_handling::ValidationError;
use crate::fetch::{fetch_resource, FetchResult};
use crate::parse::{decode_html, extract_page_metadata, should_parse_html, PageMetadata};

/// Result of [`Inspector::check_url`].
///
/// Transport fields describe the fetch; the SEO fields come from the HTML
/// body and are unset when the response was not HTML or the fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    /// The validated URL that was requested.
    pub url: String,
    pub http_status: Option<u16>,
    pub redirected: bool,
    pub final_url: Option<String>,
    pub redirect_chain: Vec<String>,
    pub response_time: Option<f64>,
    #[serde(flatten)]
    pub metadata: PageMetadata,
    /// `X-Robots-Tag` response header.
    pub x_robots_tag: Option<String>,
    pub content_type: Option<String>,
    /// `Content-Length` response header, if present and numeric.
    pub content_length: Option<u64>,
    /// Every response header, names lower-cased.
    pub headers: BTreeMap<String, String>,
    pub message: String,
}

impl PageReport {
    fn failed(url: String, message: String) -> Self {
        Self {
            url,
            http_status: None,
            redirected: false,
            final_url: None,
            redirect_chain: Vec::new(),
            response_time: None,
            metadata: PageMetadata::default(),
            x_robots_tag: None,
            content_type: None,
            content_length: None,
            headers: BTreeMap::new(),
            message,
        }
    }

    fn from_fetch(url: String, fetched: FetchResult) -> Self {
        let content_type = fetched.header("content-type").map(str::to_string);
        let x_robots_tag = fetched.header("x-robots-tag").map(str::to_string);
        let content_length = fetched
            .header("content-length")
            .and_then(|len| len.trim().parse::<u64>().ok());

        let metadata = if should_parse_html(content_type.as_deref(), &fetched.body) {
            let html = decode_html(&fetched.body, content_type.as_deref());
            extract_page_metadata(&html, &fetched.final_url)
        } else {
            log::debug!(
                "Not parsing {} as HTML (content-type {:?})",
                fetched.final_url,
                content_type
            );
            PageMetadata::default()
        };

        Self {
            url,
            http_status: Some(fetched.status_code),
            redirected: fetched.redirected(),
            response_time: Some(fetched.response_time_secs()),
            message: format!("URL checked successfully. Status: {}", fetched.status_code),
            final_url: Some(fetched.final_url),
            redirect_chain: fetched.redirect_chain,
            metadata,
            x_robots_tag,
            content_type,
            content_length,
            headers: fetched.headers,
        }
    }
}

impl Inspector {
    /// Fetches a page and extracts its SEO metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `url` is not an absolute http(s) URL
    /// with a host, or is too long. No request is made in that case. Network
    /// failures are not errors: they produce a report whose message starts
    /// with `Request failed:`.
    pub async fn check_url(&self, url: &str) -> Result<PageReport, ValidationError> {
        let url = validate_page_url(url)?.to_string();

        let report = match fetch_resource(
            &self.client,
            &url,
            self.settings.page_timeout,
            self.settings.max_body_bytes,
        )
        .await
        {
            Ok(fetched) => PageReport::from_fetch(url, fetched),
            Err(e) => {
                log::warn!("Page check for {url} failed ({}): {e}", e.kind);
                let message = format!("Request failed: {e}");
                PageReport::failed(url, message)
            }
        };
        Ok(report)
    }
}
