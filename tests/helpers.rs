// Shared test helpers for building inspectors and fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use flate2::write::GzEncoder;
use flate2::Compression;

use seo_inspector::dns::StaticLookup;
use seo_inspector::{DnsOutcome, Inspector, InspectorSettings};

/// Settings with short timeouts so failing tests fail fast.
#[allow(dead_code)] // Used by other test files
pub fn test_settings() -> InspectorSettings {
    InspectorSettings {
        domain_timeout: Duration::from_secs(3),
        page_timeout: Duration::from_secs(3),
        sitemap_timeout: Duration::from_secs(3),
        ..InspectorSettings::default()
    }
}

/// Creates an inspector whose DNS lookups all return `outcome`.
#[allow(dead_code)] // Used by other test files
pub fn inspector_with_dns(outcome: DnsOutcome) -> Inspector {
    Inspector::new(test_settings(), Arc::new(StaticLookup::new(outcome)))
        .expect("Failed to build inspector")
}

/// Creates an inspector for tests that never reach the DNS step.
#[allow(dead_code)] // Used by other test files
pub fn inspector() -> Inspector {
    inspector_with_dns(DnsOutcome::Ok)
}

/// Gzips `bytes` the way a web server would for a `.xml.gz` file.
#[allow(dead_code)] // Used by other test files
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("Failed to write gzip data");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Returns a loopback URL on a port nothing listens on.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
