//! Page metadata data structures.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display as DisplayMacro, EnumString};

/// Heading rank, serialized as its tag name (`"h1"` .. `"h6"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, DisplayMacro, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

/// One `h1`-`h6` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub tag: HeadingLevel,
    pub text: String,
}

/// A `<link rel="alternate" hreflang=.. href=..>` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateHreflang {
    pub hreflang: String,
    pub href: String,
}

/// SEO-relevant fields of an HTML document.
///
/// Every field is optional or a possibly-empty collection: a page that is not
/// HTML, or is missing a tag, simply leaves the field unset. A present but
/// empty `robots_meta` (`content=""`) is kept as `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    /// Whether `canonical` is exactly the final URL. Unset without a canonical.
    pub canonical_matches: Option<bool>,
    pub h1: Option<String>,
    pub all_h1: Vec<String>,
    pub headings: Vec<Heading>,
    pub robots_meta: Option<String>,
    /// `og:*` properties; a repeated property keeps its last value.
    pub open_graph: BTreeMap<String, String>,
    /// `twitter:*` names; a repeated name keeps its last value.
    pub twitter_meta: BTreeMap<String, String>,
    /// First JSON-LD block, as raw text.
    pub schema_json_ld: Option<String>,
    pub alternate_hreflang: Vec<AlternateHreflang>,
    pub lang: Option<String>,
    pub favicon_url: Option<String>,
}
