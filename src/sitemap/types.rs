//! Sitemap document model.

/// A parsed sitemap, classified by its root element.
///
/// Entries keep document order. A `<loc>` with no text is kept as `None` so
/// positions line up with the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
    /// `<urlset>`: the `<loc>` of every `<url>`.
    UrlSet(Vec<Option<String>>),
    /// `<sitemapindex>`: the `<loc>` of every nested `<sitemap>`.
    SitemapIndex(Vec<Option<String>>),
    /// Well-formed XML with some other root element.
    Unsupported { root: String },
}

impl SitemapDocument {
    /// Local name of the root element.
    pub fn root_name(&self) -> &str {
        match self {
            SitemapDocument::UrlSet(_) => "urlset",
            SitemapDocument::SitemapIndex(_) => "sitemapindex",
            SitemapDocument::Unsupported { root } => root,
        }
    }
}
