//! HTTP request building and header extraction.
//!
//! This module provides utilities for constructing realistic HTTP requests
//! and flattening response headers into plain strings.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName};

/// Realistic browser request headers.
///
/// These mimic a modern Chrome navigation so that sites serve the same
/// document a visitor would see. Some servers answer bare HTTP clients with a
/// 403 or a stripped-down page, which would skew the SEO report.
///
/// `Accept-Encoding` is left to reqwest so that only encodings it can decode
/// are advertised. No `Referer` is sent: it would show up in the inspected
/// site's analytics as search traffic.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .header(HeaderName::from_static("sec-fetch-dest"), "document")
            .header(HeaderName::from_static("sec-fetch-mode"), "navigate")
            .header(HeaderName::from_static("sec-fetch-site"), "none")
            .header(HeaderName::from_static("sec-fetch-user"), "?1")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}

/// Flattens a response header map into lower-case name/value strings.
///
/// A header that appears several times is joined with `", "` in arrival
/// order. Values that are not valid UTF-8 are decoded lossily rather than
/// dropped.
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        flat.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    flat
}
