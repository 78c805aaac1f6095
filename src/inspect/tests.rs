//! Report construction and serialization tests.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::dns::{DnsOutcome, StaticLookup};
use crate::error_handling::ValidationError;

fn inspector_with_dns(outcome: DnsOutcome) -> Inspector {
    Inspector::new(
        InspectorSettings::default(),
        Arc::new(StaticLookup::new(outcome)),
    )
    .expect("inspector should build")
}

#[test]
fn test_sitemap_status_strings() {
    let found = SitemapStatus::Found {
        urls: vec![],
        sitemap_files: vec![],
    };
    assert_eq!(found.to_string(), "Found");
    assert_eq!(SitemapStatus::NotFound.to_string(), "Not Found");
    assert_eq!(SitemapStatus::ParseError.to_string(), "Parse Error");
    assert_eq!(SitemapStatus::DecompressionFailed.to_string(), "Decompression Failed");
    assert_eq!(SitemapStatus::UnsupportedFormat.to_string(), "Unsupported format");
    assert_eq!(SitemapStatus::Error.to_string(), "Error");

    assert_eq!(SitemapUrlsStatus::Parsed(vec![]).to_string(), "Parsed");
    assert_eq!(SitemapUrlsStatus::NotFound.to_string(), "Not Found");
    assert_eq!(SitemapUrlsStatus::Error.to_string(), "Error");
}

#[test]
fn test_sitemap_report_serializes_flat_and_drops_empty_entries() {
    let report = SitemapReport {
        sitemap_url: "https://example.com/sitemap.xml".into(),
        status: SitemapStatus::Found {
            urls: vec![Some("https://example.com/a".into()), None],
            sitemap_files: vec![],
        },
        http_status: Some(200),
        message: "ok".into(),
    };
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "sitemap_url": "https://example.com/sitemap.xml",
            "sitemap_status": "Found",
            "http_status": 200,
            "sitemap_files": [],
            "urls": ["https://example.com/a"],
            "message": "ok"
        })
    );
}

#[test]
fn test_failed_sitemap_report_has_empty_lists() {
    let report = SitemapReport {
        sitemap_url: "https://example.com/sitemap.xml".into(),
        status: SitemapStatus::Error,
        http_status: None,
        message: "Request error: boom".into(),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["sitemap_status"], "Error");
    assert_eq!(value["http_status"], serde_json::Value::Null);
    assert_eq!(value["urls"], json!([]));
    assert_eq!(value["sitemap_files"], json!([]));
}

#[test]
fn test_sitemap_urls_report_serialization() {
    let report = SitemapUrlsReport {
        sitemap_url: "https://example.com/s.xml.gz".into(),
        status: SitemapUrlsStatus::Parsed(vec![None, Some("https://example.com/x".into())]),
        http_status: Some(200),
        message: "Parsed 2 URLs from sitemap.".into(),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["sitemap_status"], "Parsed");
    assert_eq!(value["urls"], json!(["https://example.com/x"]));
    assert!(value.get("sitemap_files").is_none());
}

#[tokio::test]
async fn test_dns_failure_skips_http() {
    // The domain does not exist anywhere; StaticLookup answers first
    let inspector = inspector_with_dns(DnsOutcome::NonExistentDomain);
    let report = inspector.check_domain("nonexistent.invalid").await;

    assert_eq!(report.fixed_domain, "https://nonexistent.invalid");
    assert_eq!(report.dns_status, DnsOutcome::NonExistentDomain);
    assert_eq!(report.http_status, None);
    assert!(!report.is_live);
    assert_eq!(report.redirected, None);
    assert_eq!(report.final_url, None);
    assert!(report.redirect_chain.is_empty());
    assert_eq!(report.response_time, None);
    assert_eq!(report.message, "DNS issue: NXDOMAIN");

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["dns_status"], "NXDOMAIN");
    assert_eq!(value["http_status"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_invalid_page_url_is_rejected_before_fetch() {
    let inspector = inspector_with_dns(DnsOutcome::Ok);
    let err = inspector.check_url("not a url").await.unwrap_err();
    assert!(matches!(err, ValidationError::Malformed { .. }));
    assert!(inspector.check_url("ftp://example.com/").await.is_err());
}

#[tokio::test]
async fn test_from_settings_builds() {
    let inspector = Inspector::from_settings(InspectorSettings::default())
        .expect("inspector should build");
    assert_eq!(inspector.settings().max_body_bytes, crate::config::MAX_RESPONSE_BODY_SIZE);
}
