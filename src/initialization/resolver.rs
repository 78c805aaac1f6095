//! DNS resolver initialization.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::InspectorSettings;

/// Initializes the DNS resolver for A-record lookups.
///
/// Uses the default upstream configuration with the configured timeout and
/// attempt count, so slow or unresponsive DNS servers fail fast.
pub fn init_resolver(settings: &InspectorSettings) -> TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = settings.dns_timeout;
    opts.attempts = settings.dns_attempts;
    // No search-domain appending: inputs are always fully qualified hostnames
    opts.ndots = 0;

    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}
