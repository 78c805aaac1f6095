//! HTML metadata extraction.
//!
//! The document is walked once. Each element is dispatched on its tag name to
//! the rule for that tag, so the cost is one DOM traversal regardless of how
//! many fields are collected.

use std::collections::BTreeMap;
use std::str::FromStr;

use scraper::{ElementRef, Html};

use super::types::{AlternateHreflang, Heading, HeadingLevel, PageMetadata};

const JSON_LD_TYPE: &str = "application/ld+json";

/// Decides whether a response body should be parsed as HTML.
///
/// A declared `Content-Type` must name `text/html` or
/// `application/xhtml+xml`. Without one, the body is sniffed: it must start
/// with `<!doctype html` or `<html`, ignoring case and leading whitespace.
pub fn should_parse_html(content_type: Option<&str>, body: &[u8]) -> bool {
    match content_type.map(str::trim).filter(|ct| !ct.is_empty()) {
        Some(ct) => {
            let ct = ct.to_ascii_lowercase();
            ct.contains("text/html") || ct.contains("application/xhtml+xml")
        }
        None => {
            let start = body.trim_ascii_start();
            starts_with_ignore_case(start, b"<!doctype html")
                || starts_with_ignore_case(start, b"<html")
        }
    }
}

fn starts_with_ignore_case(haystack: &[u8], prefix: &[u8]) -> bool {
    haystack.len() >= prefix.len() && haystack[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Extracts [`PageMetadata`] from an HTML document.
///
/// Malformed markup never fails: the HTML5 parser repairs what it can and
/// missing tags leave their fields unset.
///
/// # Arguments
///
/// * `html` - The document source
/// * `final_url` - URL the document was served from, compared against the
///   canonical link
pub fn extract_page_metadata(html: &str, final_url: &str) -> PageMetadata {
    let document = Html::parse_document(html);
    let mut collector = MetadataCollector::default();

    for node in document.root_element().descendants() {
        if let Some(element) = ElementRef::wrap(node) {
            collector.visit(element);
        }
    }

    let metadata = collector.finish(final_url);
    log::debug!(
        "Extracted metadata from {final_url}: title={:?}, {} headings, canonical={:?}",
        metadata.title,
        metadata.headings.len(),
        metadata.canonical
    );
    metadata
}

/// Per-document extraction state.
///
/// "First wins" fields are `Option<Option<_>>`: the outer option records
/// that the first matching element was seen, the inner one whether it had a
/// usable value. Later matches never override it.
#[derive(Default)]
struct MetadataCollector {
    title: Option<Option<String>>,
    description: Option<Option<String>>,
    robots: Option<Option<String>>,
    canonical: Option<Option<String>>,
    favicon: Option<Option<String>>,
    json_ld: Option<Option<String>>,
    lang: Option<Option<String>>,
    headings: Vec<Heading>,
    alternates: Vec<AlternateHreflang>,
    open_graph: BTreeMap<String, String>,
    twitter_meta: BTreeMap<String, String>,
}

impl MetadataCollector {
    fn visit(&mut self, element: ElementRef<'_>) {
        match element.value().name() {
            "html" => {
                if self.lang.is_none() {
                    self.lang = Some(attr_trimmed(element, "lang"));
                }
            }
            "title" => {
                if self.title.is_none() {
                    self.title = Some(non_empty(text_trimmed(element)));
                }
            }
            "meta" => self.visit_meta(element),
            "link" => self.visit_link(element),
            "script" => {
                let is_json_ld = element
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_TYPE));
                if is_json_ld && self.json_ld.is_none() {
                    self.json_ld = Some(non_empty(text_trimmed(element)));
                }
            }
            name => {
                if let Ok(tag) = HeadingLevel::from_str(name) {
                    self.headings.push(Heading {
                        tag,
                        text: text_trimmed(element),
                    });
                }
            }
        }
    }

    fn visit_meta(&mut self, element: ElementRef<'_>) {
        let meta = element.value();
        let content = || meta.attr("content").map(|c| c.trim().to_string());

        if let Some(property) = meta.attr("property") {
            if property.starts_with("og:") {
                if let Some(value) = content() {
                    self.open_graph.insert(property.to_string(), value);
                }
            }
        }

        let Some(name) = meta.attr("name") else {
            return;
        };
        if name.starts_with("twitter:") {
            if let Some(value) = content() {
                self.twitter_meta.insert(name.to_string(), value);
            }
        } else if name.trim().eq_ignore_ascii_case("description") {
            self.description.get_or_insert_with(content);
        } else if name.trim().eq_ignore_ascii_case("robots") {
            self.robots.get_or_insert_with(content);
        }
    }

    fn visit_link(&mut self, element: ElementRef<'_>) {
        let link = element.value();
        let Some(rel) = link.attr("rel") else {
            return;
        };
        let rel = rel.to_ascii_lowercase();
        let has_token = |token: &str| rel.split_ascii_whitespace().any(|t| t == token);

        if has_token("canonical") && self.canonical.is_none() {
            self.canonical = Some(non_empty(attr_trimmed(element, "href")));
        }
        if has_token("alternate") {
            if let (Some(hreflang), Some(href)) = (link.attr("hreflang"), link.attr("href")) {
                self.alternates.push(AlternateHreflang {
                    hreflang: hreflang.trim().to_string(),
                    href: href.trim().to_string(),
                });
            }
        }
        // "icon", "shortcut icon", "apple-touch-icon", ...
        if rel.contains("icon") && self.favicon.is_none() {
            self.favicon = Some(non_empty(attr_trimmed(element, "href")));
        }
    }

    fn finish(self, final_url: &str) -> PageMetadata {
        let canonical = self.canonical.flatten();
        let canonical_matches = canonical.as_deref().map(|c| c == final_url);
        let all_h1: Vec<String> = self
            .headings
            .iter()
            .filter(|h| h.tag == HeadingLevel::H1)
            .map(|h| h.text.clone())
            .collect();

        PageMetadata {
            title: self.title.flatten(),
            description: self.description.flatten(),
            canonical,
            canonical_matches,
            h1: all_h1.first().cloned(),
            all_h1,
            headings: self.headings,
            robots_meta: self.robots.flatten(),
            open_graph: self.open_graph,
            twitter_meta: self.twitter_meta,
            schema_json_ld: self.json_ld.flatten(),
            alternate_hreflang: self.alternates,
            lang: self.lang.flatten(),
            favicon_url: self.favicon.flatten(),
        }
    }
}

fn text_trimmed(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn attr_trimmed(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(|v| v.trim().to_string())
}

fn non_empty(value: impl Into<Option<String>>) -> Option<String> {
    value.into().filter(|v| !v.is_empty())
}
