//! DNS module tests.

use super::resolution::{
    classify_resolve_error, classify_resolve_error_kind, outcome_for_empty_answer,
};
use super::*;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use std::time::Duration;

/// Creates a test DNS resolver with short timeouts for faster test execution.
fn create_test_lookup() -> HickoryLookup {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(5);
    opts.attempts = 1; // Single attempt for faster failures in tests
    opts.ndots = 0;

    let resolver = hickory_resolver::TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
    HickoryLookup::new(resolver, Duration::from_secs(6))
}

#[test]
fn test_outcome_display_strings() {
    assert_eq!(DnsOutcome::Ok.to_string(), "ok");
    assert_eq!(DnsOutcome::NoRecord.to_string(), "No A record");
    assert_eq!(DnsOutcome::NonExistentDomain.to_string(), "NXDOMAIN");
    assert_eq!(DnsOutcome::Timeout.to_string(), "DNS timeout");
    assert_eq!(
        DnsOutcome::Failed("no connections available".into()).to_string(),
        "DNS error: no connections available"
    );
}

#[test]
fn test_outcome_serializes_as_status_string() {
    let json = serde_json::to_string(&DnsOutcome::NonExistentDomain).unwrap();
    assert_eq!(json, "\"NXDOMAIN\"");
    let json = serde_json::to_string(&DnsOutcome::Ok).unwrap();
    assert_eq!(json, "\"ok\"");
}

#[test]
fn test_empty_answer_classification() {
    assert_eq!(
        outcome_for_empty_answer(ResponseCode::NXDomain),
        DnsOutcome::NonExistentDomain
    );
    assert_eq!(
        outcome_for_empty_answer(ResponseCode::NoError),
        DnsOutcome::NoRecord
    );
}

#[test]
fn test_timeout_kind_is_timeout() {
    assert_eq!(
        classify_resolve_error_kind(&ResolveErrorKind::Timeout),
        Some(DnsOutcome::Timeout)
    );
}

#[test]
fn test_unknown_error_is_generic_failure() {
    let err = ResolveError::from(ResolveErrorKind::Message("no connections available"));
    match classify_resolve_error(&err) {
        DnsOutcome::Failed(detail) => assert!(detail.contains("no connections available")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_ip_literal_needs_no_lookup() {
    let lookup = create_test_lookup();
    assert_eq!(lookup.resolve_a("127.0.0.1").await, DnsOutcome::Ok);
    assert_eq!(lookup.resolve_a("::1").await, DnsOutcome::Ok);
}

#[tokio::test]
async fn test_static_lookup_returns_configured_outcome() {
    let lookup = StaticLookup::new(DnsOutcome::Timeout);
    assert_eq!(lookup.resolve_a("example.com").await, DnsOutcome::Timeout);
    assert_eq!(lookup.resolve_a("other.org").await, DnsOutcome::Timeout);
}

#[tokio::test]
#[ignore] // Requires network access: cargo test -- --ignored
async fn test_resolve_well_known_domain() {
    let lookup = create_test_lookup();
    assert_eq!(lookup.resolve_a("example.com").await, DnsOutcome::Ok);
}

#[tokio::test]
#[ignore] // Requires network access: cargo test -- --ignored
async fn test_resolve_reserved_invalid_tld() {
    let lookup = create_test_lookup();
    // .invalid is reserved (RFC 2606) and never resolves
    let outcome = lookup
        .resolve_a("definitely-does-not-exist-12345.invalid")
        .await;
    assert!(
        matches!(outcome, DnsOutcome::NonExistentDomain | DnsOutcome::NoRecord),
        "unexpected outcome: {outcome:?}"
    );
}
