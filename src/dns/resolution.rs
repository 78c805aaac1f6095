//! A-record resolution and outcome classification.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use serde::{Serialize, Serializer};

/// Result of resolving a host's A record.
///
/// Serialized as the human-readable status string (`"ok"`, `"NXDOMAIN"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsOutcome {
    /// At least one A record exists.
    Ok,
    /// The name exists but has no A record.
    NoRecord,
    /// The name does not exist.
    NonExistentDomain,
    /// No answer arrived in time.
    Timeout,
    /// Any other resolver failure, with its message.
    Failed(String),
}

impl DnsOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, DnsOutcome::Ok)
    }
}

impl std::fmt::Display for DnsOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DnsOutcome::Ok => f.write_str("ok"),
            DnsOutcome::NoRecord => f.write_str("No A record"),
            DnsOutcome::NonExistentDomain => f.write_str("NXDOMAIN"),
            DnsOutcome::Timeout => f.write_str("DNS timeout"),
            DnsOutcome::Failed(detail) => write!(f, "DNS error: {detail}"),
        }
    }
}

impl Serialize for DnsOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolves hostnames to a [`DnsOutcome`].
///
/// Implementations must be safe to share between concurrent requests and must
/// respect their own timeout; they never return an error.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn resolve_a(&self, host: &str) -> DnsOutcome;
}

/// [`DnsLookup`] backed by `hickory-resolver`.
pub struct HickoryLookup {
    resolver: TokioAsyncResolver,
    overall_timeout: Duration,
}

impl HickoryLookup {
    /// Wraps a resolver. `overall_timeout` bounds the whole lookup including
    /// the resolver's own retries.
    pub fn new(resolver: TokioAsyncResolver, overall_timeout: Duration) -> Self {
        Self {
            resolver,
            overall_timeout,
        }
    }
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn resolve_a(&self, host: &str) -> DnsOutcome {
        // IP literals need no lookup; querying them as names would yield NXDOMAIN
        if host.parse::<IpAddr>().is_ok() {
            return DnsOutcome::Ok;
        }

        let lookup = tokio::time::timeout(self.overall_timeout, self.resolver.ipv4_lookup(host));
        let outcome = match lookup.await {
            Err(_) => DnsOutcome::Timeout,
            Ok(Ok(answer)) => {
                if answer.iter().next().is_some() {
                    DnsOutcome::Ok
                } else {
                    DnsOutcome::NoRecord
                }
            }
            Ok(Err(e)) => classify_resolve_error(&e),
        };

        if outcome.is_ok() {
            log::debug!("A lookup for {host} succeeded");
        } else {
            log::warn!("A lookup for {host} failed: {outcome}");
        }
        outcome
    }
}

/// Maps a resolver error onto a [`DnsOutcome`].
pub(crate) fn classify_resolve_error(error: &ResolveError) -> DnsOutcome {
    classify_resolve_error_kind(error.kind())
        .unwrap_or_else(|| DnsOutcome::Failed(error.to_string()))
}

pub(crate) fn classify_resolve_error_kind(kind: &ResolveErrorKind) -> Option<DnsOutcome> {
    match kind {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            Some(outcome_for_empty_answer(*response_code))
        }
        ResolveErrorKind::Timeout => Some(DnsOutcome::Timeout),
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            Some(DnsOutcome::Timeout)
        }
        _ => None,
    }
}

/// An answer without records is NXDOMAIN when the server said so, otherwise
/// the name exists without the requested record type.
pub(crate) fn outcome_for_empty_answer(response_code: ResponseCode) -> DnsOutcome {
    if response_code == ResponseCode::NXDomain {
        DnsOutcome::NonExistentDomain
    } else {
        DnsOutcome::NoRecord
    }
}

/// [`DnsLookup`] that answers every query with the same outcome.
///
/// Useful for tests and for running the pipelines without network DNS.
#[derive(Debug, Clone)]
pub struct StaticLookup {
    outcome: DnsOutcome,
}

impl StaticLookup {
    pub fn new(outcome: DnsOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl DnsLookup for StaticLookup {
    async fn resolve_a(&self, _host: &str) -> DnsOutcome {
        self.outcome.clone()
    }
}
