//! Streaming sitemap XML parser.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::types::SitemapDocument;
use crate::error_handling::SitemapError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses sitemap XML into a [`SitemapDocument`].
///
/// Namespace prefixes are ignored: `<sm:urlset>` is a `urlset`. Text is
/// decoded with the encoding named in the XML declaration, UTF-8 when there
/// is none.
///
/// # Errors
///
/// Returns [`SitemapError::Parse`] if the input is not a single well-formed
/// XML element tree: no root element, mismatched or unclosed tags, invalid
/// escapes, or content after the root element.
pub fn parse_document(xml: &[u8]) -> Result<SitemapDocument, SitemapError> {
    let xml = xml.strip_prefix(UTF8_BOM).unwrap_or(xml);
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut builder = DocumentBuilder::default();
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            SitemapError::Parse(format!("{e} (at byte {})", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                builder.open(&String::from_utf8_lossy(e.local_name().as_ref()))?;
            }
            Event::End(e) => {
                builder.close(&String::from_utf8_lossy(e.local_name().as_ref()))?;
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                builder.open(&name)?;
                builder.close(&name)?;
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| SitemapError::Parse(e.to_string()))?;
                builder.text(&text)?;
            }
            Event::CData(e) => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|e| SitemapError::Parse(e.to_string()))?;
                builder.text(&text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

/// Tracks the open element path while events stream past.
#[derive(Default)]
struct DocumentBuilder {
    root: Option<String>,
    root_closed: bool,
    stack: Vec<String>,
    entries: Vec<Option<String>>,
    // Depth and text of the <loc> currently being collected
    open_loc: Option<(usize, String)>,
}

impl DocumentBuilder {
    /// Element whose direct `<loc>` child is an entry, given the root.
    fn entry_parent(&self) -> Option<&'static str> {
        match self.root.as_deref() {
            Some("urlset") => Some("url"),
            Some("sitemapindex") => Some("sitemap"),
            _ => None,
        }
    }

    fn open(&mut self, name: &str) -> Result<(), SitemapError> {
        if self.root_closed {
            return Err(SitemapError::Parse(format!(
                "junk after document element: <{name}>"
            )));
        }
        if self.root.is_none() {
            self.root = Some(name.to_string());
        }

        let parent = self.stack.last().map(String::as_str);
        let is_entry = parent.is_some() && parent == self.entry_parent();
        if name == "loc" && is_entry && self.open_loc.is_none() {
            self.open_loc = Some((self.stack.len(), String::new()));
        }
        self.stack.push(name.to_string());
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<(), SitemapError> {
        match self.stack.pop() {
            Some(open) if open == name => {}
            Some(open) => {
                return Err(SitemapError::Parse(format!(
                    "mismatched tag: expected </{open}>, found </{name}>"
                )))
            }
            None => {
                return Err(SitemapError::Parse(format!("unexpected closing tag </{name}>")));
            }
        }

        if self.open_loc.as_ref().is_some_and(|(depth, _)| *depth == self.stack.len()) {
            if let Some((_, text)) = self.open_loc.take() {
                let text = text.trim();
                self.entries.push((!text.is_empty()).then(|| text.to_string()));
            }
        }

        if self.stack.is_empty() {
            self.root_closed = true;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), SitemapError> {
        if self.stack.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            let position = if self.root_closed { "after" } else { "before" };
            return Err(SitemapError::Parse(format!(
                "text content {position} the root element"
            )));
        }
        if let Some((_, collected)) = self.open_loc.as_mut() {
            collected.push_str(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<SitemapDocument, SitemapError> {
        let Some(root) = self.root else {
            return Err(SitemapError::Parse("no element found".to_string()));
        };
        if let Some(open) = self.stack.last() {
            return Err(SitemapError::Parse(format!(
                "unclosed element <{open}> at end of document"
            )));
        }

        Ok(match root.as_str() {
            "urlset" => SitemapDocument::UrlSet(self.entries),
            "sitemapindex" => SitemapDocument::SitemapIndex(self.entries),
            _ => SitemapDocument::Unsupported { root },
        })
    }
}
