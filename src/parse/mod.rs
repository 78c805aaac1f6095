//! HTML parsing and SEO metadata extraction.
//!
//! This module extracts the SEO-relevant parts of an HTML page:
//! - Title, meta description and meta robots
//! - Canonical link, alternate hreflang links and favicon
//! - The full h1-h6 outline
//! - Open Graph and Twitter Card meta tags
//! - The first JSON-LD block (kept as raw text)
//! - The document language
//!
//! Bodies are decoded by their declared charset before parsing.
//!
//! Parsing is done with `scraper` in a single traversal of the DOM.

mod charset;
mod html;
mod types;

// Re-export public API
pub use charset::{charset_from_content_type, charset_from_meta, decode_html};
pub use html::{extract_page_metadata, should_parse_html};
pub use types::{AlternateHreflang, Heading, HeadingLevel, PageMetadata};
