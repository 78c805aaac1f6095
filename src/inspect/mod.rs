//! Inspection pipelines.
//!
//! [`Inspector`] owns the shared HTTP client and DNS resolver and runs the four
//! pipelines on top of them:
//! - [`Inspector::check_domain`]: DNS, then HTTP reachability and redirects
//! - [`Inspector::check_sitemap`]: `<domain>/sitemap.xml` discovery and parsing
//! - [`Inspector::fetch_sitemap_urls`]: page URLs of one sitemap file
//! - [`Inspector::check_url`]: page fetch and SEO metadata extraction
//!
//! Every pipeline folds DNS, transport and content failures into its report.
//! Only [`Inspector::check_url`] can fail, and only on input validation.

mod domain;
mod page;
mod sitemap;

use std::sync::Arc;

use crate::config::InspectorSettings;
use crate::dns::{DnsLookup, HickoryLookup};
use crate::error_handling::InitializationError;
use crate::initialization::{init_client, init_resolver};

pub use domain::DomainReport;
pub use page::PageReport;
pub use sitemap::{SitemapReport, SitemapStatus, SitemapUrlsReport, SitemapUrlsStatus};

/// Runs inspections against live resources.
///
/// Cheap to clone: the client and resolver are shared, so one instance can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct Inspector {
    client: reqwest::Client,
    dns: Arc<dyn DnsLookup>,
    settings: Arc<InspectorSettings>,
}

impl Inspector {
    /// Creates an inspector that resolves names through `dns`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn new(
        settings: InspectorSettings,
        dns: Arc<dyn DnsLookup>,
    ) -> Result<Self, InitializationError> {
        let client = init_client(&settings)?;
        Ok(Self {
            client,
            dns,
            settings: Arc::new(settings),
        })
    }

    /// Creates an inspector backed by the system's upstream DNS servers.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn from_settings(settings: InspectorSettings) -> Result<Self, InitializationError> {
        let resolver = init_resolver(&settings);
        // Bound the whole lookup, resolver retries included
        let attempts = u32::try_from(settings.dns_attempts.max(1)).unwrap_or(u32::MAX);
        let overall = settings.dns_timeout.saturating_mul(attempts);
        let dns = Arc::new(HickoryLookup::new(resolver, overall));
        Self::new(settings, dns)
    }

    pub fn settings(&self) -> &InspectorSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests;
