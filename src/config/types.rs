//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the inspection pipelines.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rand::seq::IndexedRandom;

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_USER_AGENT, DNS_ATTEMPTS, DNS_TIMEOUT_SECS, DOMAIN_TIMEOUT_SECS,
    FALLBACK_USER_AGENTS, MAX_RESPONSE_BODY_SIZE, PAGE_TIMEOUT_SECS, SITEMAP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What the binary should do once configured.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind the HTTP API to
        #[arg(long, env = "SEO_INSPECTOR_BIND", default_value = DEFAULT_BIND_ADDR)]
        bind: String,
    },
    /// Check DNS and HTTP liveness of a domain
    Domain {
        /// Domain or URL; `https://` is added when no scheme is given
        domain: String,
    },
    /// Look for `<domain>/sitemap.xml` and list its entries
    Sitemap {
        /// Domain or URL; `https://` is added when no scheme is given
        domain: String,
    },
    /// Fetch a specific sitemap file (plain or gzipped) and list its URLs
    SitemapUrls {
        /// Full URL of the sitemap file
        sitemap_url: String,
    },
    /// Inspect a single page for SEO metadata
    Url {
        /// Absolute http(s) URL of the page
        url: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            bind: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Application configuration.
///
/// Parsed from the command line (with environment variable fallbacks), or
/// constructed programmatically for library use.
///
/// # Examples
///
/// ```no_run
/// use seo_inspector::Config;
///
/// let config = Config {
///     page_timeout_secs: 30,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "seo_inspector", version, about)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, env = "SEO_INSPECTOR_LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, env = "SEO_INSPECTOR_LOG_FORMAT", default_value = "plain")]
    pub log_format: LogFormat,

    /// DNS query timeout in seconds
    #[arg(long, env = "SEO_INSPECTOR_DNS_TIMEOUT", default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// HTTP timeout for domain checks in seconds
    #[arg(long, env = "SEO_INSPECTOR_DOMAIN_TIMEOUT", default_value_t = DOMAIN_TIMEOUT_SECS)]
    pub domain_timeout_secs: u64,

    /// HTTP timeout for page checks in seconds
    #[arg(long, env = "SEO_INSPECTOR_PAGE_TIMEOUT", default_value_t = PAGE_TIMEOUT_SECS)]
    pub page_timeout_secs: u64,

    /// HTTP timeout for sitemap retrieval in seconds
    #[arg(long, env = "SEO_INSPECTOR_SITEMAP_TIMEOUT", default_value_t = SITEMAP_TIMEOUT_SECS)]
    pub sitemap_timeout_secs: u64,

    /// Largest response body (and gunzipped sitemap) accepted, in bytes
    #[arg(long, env = "SEO_INSPECTOR_MAX_BODY_BYTES", default_value_t = MAX_RESPONSE_BODY_SIZE)]
    pub max_body_bytes: usize,

    /// HTTP User-Agent header value (random browser UA when omitted)
    #[arg(long, env = "SEO_INSPECTOR_USER_AGENT")]
    pub user_agent: Option<String>,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            domain_timeout_secs: DOMAIN_TIMEOUT_SECS,
            page_timeout_secs: PAGE_TIMEOUT_SECS,
            sitemap_timeout_secs: SITEMAP_TIMEOUT_SECS,
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
            user_agent: None,
            command: Command::default(),
        }
    }
}

impl Config {
    /// Builds the pipeline settings from this configuration.
    ///
    /// When no User-Agent was configured, one of [`FALLBACK_USER_AGENTS`] is
    /// picked at random.
    pub fn inspector_settings(&self) -> InspectorSettings {
        let user_agent = self.user_agent.clone().unwrap_or_else(|| {
            let picked = FALLBACK_USER_AGENTS
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(DEFAULT_USER_AGENT);
            log::debug!("Using fallback User-Agent: {picked}");
            picked.to_string()
        });

        InspectorSettings {
            dns_timeout: Duration::from_secs(self.dns_timeout_secs),
            dns_attempts: DNS_ATTEMPTS,
            domain_timeout: Duration::from_secs(self.domain_timeout_secs),
            page_timeout: Duration::from_secs(self.page_timeout_secs),
            sitemap_timeout: Duration::from_secs(self.sitemap_timeout_secs),
            max_body_bytes: self.max_body_bytes,
            user_agent,
        }
    }
}

/// Settings handed to [`crate::Inspector`] and the resources it owns.
///
/// Kept separate from [`Config`] so tests can inject short timeouts without
/// going through CLI parsing.
#[derive(Debug, Clone)]
pub struct InspectorSettings {
    /// Timeout for a single DNS query
    pub dns_timeout: Duration,
    /// Resolver attempts per query
    pub dns_attempts: usize,
    /// HTTP timeout used by the domain check
    pub domain_timeout: Duration,
    /// HTTP timeout used by the page check
    pub page_timeout: Duration,
    /// HTTP timeout used by both sitemap pipelines
    pub sitemap_timeout: Duration,
    /// Upper bound on response bodies and gunzipped sitemaps
    pub max_body_bytes: usize,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            dns_attempts: DNS_ATTEMPTS,
            domain_timeout: Duration::from_secs(DOMAIN_TIMEOUT_SECS),
            page_timeout: Duration::from_secs(PAGE_TIMEOUT_SECS),
            sitemap_timeout: Duration::from_secs(SITEMAP_TIMEOUT_SECS),
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dns_timeout_secs, 3);
        assert_eq!(config.domain_timeout_secs, 5);
        assert_eq!(config.page_timeout_secs, 15);
        assert_eq!(config.sitemap_timeout_secs, 30);
        assert!(config.user_agent.is_none());
        assert!(matches!(config.command, Command::Serve { .. }));
    }

    #[test]
    fn test_parse_subcommand_and_flags() {
        let config = Config::try_parse_from([
            "seo_inspector",
            "--page-timeout-secs",
            "7",
            "--user-agent",
            "site-checker/1.0",
            "url",
            "https://example.com/page",
        ])
        .expect("arguments should parse");

        assert_eq!(config.page_timeout_secs, 7);
        assert_eq!(config.user_agent.as_deref(), Some("site-checker/1.0"));
        match config.command {
            Command::Url { url } => assert_eq!(url, "https://example.com/page"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sitemap_urls_subcommand() {
        let config = Config::try_parse_from([
            "seo_inspector",
            "sitemap-urls",
            "https://example.com/sitemap1.xml.gz",
        ])
        .expect("arguments should parse");
        assert!(matches!(config.command, Command::SitemapUrls { .. }));
    }

    #[test]
    fn test_inspector_settings_uses_configured_user_agent() {
        let config = Config {
            user_agent: Some("site-checker/1.0".to_string()),
            page_timeout_secs: 9,
            ..Default::default()
        };
        let settings = config.inspector_settings();
        assert_eq!(settings.user_agent, "site-checker/1.0");
        assert_eq!(settings.page_timeout, Duration::from_secs(9));
    }

    #[test]
    fn test_inspector_settings_falls_back_to_known_user_agent() {
        let settings = Config::default().inspector_settings();
        assert!(FALLBACK_USER_AGENTS.contains(&settings.user_agent.as_str()));
    }
}
