//! Domain liveness check.

use serde::Serialize;

use super::Inspector;
use crate::app::{host_for_lookup, normalize_domain};
use crate::dns::DnsOutcome;
use crate::fetch::{fetch_resource, FetchResult};

/// Result of [`Inspector::check_domain`].
///
/// When DNS fails, every HTTP-derived field is unset and `redirect_chain` is
/// empty. `is_live` is true only for a final status of exactly 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReport {
    /// The input with `https://` added when it had no scheme.
    pub fixed_domain: String,
    pub dns_status: DnsOutcome,
    pub http_status: Option<u16>,
    pub is_live: bool,
    pub redirected: Option<bool>,
    pub final_url: Option<String>,
    pub redirect_chain: Vec<String>,
    /// Seconds until the final response headers arrived, to the millisecond.
    pub response_time: Option<f64>,
    pub message: String,
}

impl DomainReport {
    fn unreachable(fixed_domain: String, dns_status: DnsOutcome, message: String) -> Self {
        Self {
            fixed_domain,
            dns_status,
            http_status: None,
            is_live: false,
            redirected: None,
            final_url: None,
            redirect_chain: Vec::new(),
            response_time: None,
            message,
        }
    }

    fn from_fetch(fixed_domain: String, fetched: FetchResult) -> Self {
        let status = fetched.status_code;
        let is_live = status == 200;
        let message = if is_live {
            "Domain is live and responded with 200".to_string()
        } else {
            format!("Site returned status {status}")
        };

        Self {
            fixed_domain,
            dns_status: DnsOutcome::Ok,
            http_status: Some(status),
            is_live,
            redirected: Some(fetched.redirected()),
            response_time: Some(fetched.response_time_secs()),
            final_url: Some(fetched.final_url),
            redirect_chain: fetched.redirect_chain,
            message,
        }
    }
}

impl Inspector {
    /// Checks whether a domain resolves and answers HTTP.
    ///
    /// The input may be a bare domain or a full URL; a missing scheme becomes
    /// `https://`. The HTTP request is only made once the host has an A
    /// record.
    pub async fn check_domain(&self, domain: &str) -> DomainReport {
        let fixed_domain = normalize_domain(domain);
        let host = host_for_lookup(&fixed_domain);

        let dns_status = self.dns.resolve_a(&host).await;
        if !dns_status.is_ok() {
            let message = format!("DNS issue: {dns_status}");
            return DomainReport::unreachable(fixed_domain, dns_status, message);
        }

        match fetch_resource(
            &self.client,
            &fixed_domain,
            self.settings.domain_timeout,
            self.settings.max_body_bytes,
        )
        .await
        {
            Ok(fetched) => DomainReport::from_fetch(fixed_domain, fetched),
            Err(e) => {
                log::warn!("Domain check for {fixed_domain} failed ({}): {e}", e.kind);
                let message = format!("Connection error: {e}");
                DomainReport::unreachable(fixed_domain, DnsOutcome::Ok, message)
            }
        }
    }
}
