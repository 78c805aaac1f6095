//! seo_inspector library: domain, sitemap and page inspection
//!
//! This library inspects web resources and reports what a search engine
//! would care about: whether a domain resolves and answers, what its
//! `sitemap.xml` lists, and the SEO metadata of individual pages (title,
//! description, canonical, headings, Open Graph, JSON-LD, hreflang, ...).
//!
//! Every inspection returns a complete report even when the inspected
//! resource is broken; DNS, network and content failures are part of the
//! report rather than errors.
//!
//! # Example
//!
//! ```no_run
//! use seo_inspector::{Inspector, InspectorSettings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inspector = Inspector::from_settings(InspectorSettings::default())?;
//!
//! let report = inspector.check_domain("example.com").await;
//! println!("{}: {}", report.fixed_domain, report.message);
//!
//! let page = inspector.check_url("https://example.com/").await?;
//! println!("title: {:?}", page.metadata.title);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod inspect;
pub mod parse;
pub mod render;
pub mod server;
pub mod sitemap;

// Re-export public API
pub use app::{host_for_lookup, normalize_domain, sitemap_url_for, validate_page_url};
pub use config::{Command, Config, InspectorSettings, LogFormat, LogLevel};
pub use dns::{DnsLookup, DnsOutcome};
pub use error_handling::{FetchError, InitializationError, SitemapError, ValidationError};
pub use inspect::{
    DomainReport, Inspector, PageReport, SitemapReport, SitemapStatus, SitemapUrlsReport,
    SitemapUrlsStatus,
};
pub use parse::PageMetadata;
pub use render::PageRenderer;
pub use run::run_command;

// Internal run module (dispatches a parsed command line)
mod run {
    use anyhow::{Context, Result};
    use serde::Serialize;

    use crate::config::{Command, Config};
    use crate::inspect::Inspector;
    use crate::server::{serve, ServerState};

    /// Runs the command selected in `config`.
    ///
    /// `serve` blocks until shutdown. The one-shot commands print their report
    /// to stdout as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the inspector cannot be initialized, the server
    /// cannot start, a page URL is invalid, or the report cannot be written.
    pub async fn run_command(config: Config) -> Result<()> {
        let settings = config.inspector_settings();
        let inspector =
            Inspector::from_settings(settings).context("Failed to initialize inspector")?;

        match config.command {
            Command::Serve { bind } => serve(&bind, ServerState::new(inspector))
                .await
                .with_context(|| format!("Failed to run HTTP API on {bind}")),
            Command::Domain { domain } => print_report(&inspector.check_domain(&domain).await),
            Command::Sitemap { domain } => print_report(&inspector.check_sitemap(&domain).await),
            Command::SitemapUrls { sitemap_url } => {
                print_report(&inspector.fetch_sitemap_urls(&sitemap_url).await)
            }
            Command::Url { url } => {
                let report = inspector
                    .check_url(&url)
                    .await
                    .with_context(|| format!("Cannot inspect '{url}'"))?;
                print_report(&report)
            }
        }
    }

    fn print_report<T: Serialize>(report: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{json}");
        Ok(())
    }
}
