//! Parsed document queries
//!
//! Checks only ever see a [`ParsedDocument`]: a read-only handle answering
//! three kinds of CSS-selector queries. [`HtmlDocument`] is the scraper-backed
//! implementation used for fetched pages; tests can supply their own.

use scraper::{Html, Selector};
use tracing::warn;

/// Read-only query surface over a parsed page
pub trait ParsedDocument {
    /// Text content of the first element matching `selector`
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Value of `attr` on the first element matching `selector`
    fn attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// Number of elements matching `selector`
    fn count(&self, selector: &str) -> usize;
}

/// HTML page parsed with `scraper`
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

/// Compile a selector. A bad selector matches nothing rather than failing the scan.
fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("Ignoring invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}

impl ParsedDocument for HtmlDocument {
    fn first_text(&self, selector: &str) -> Option<String> {
        let sel = compile(selector)?;
        self.html
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    fn attr(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = compile(selector)?;
        self.html
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }

    fn count(&self, selector: &str) -> usize {
        match compile(selector) {
            Some(sel) => self.html.select(&sel).count(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>  Blue Door Bistro  </title>
    <meta name="description" content="Seasonal plates">
    <meta property="og:title" content="Blue Door">
</head>
<body>
    <img src="a.jpg" alt="Dining room">
    <img src="b.jpg">
</body>
</html>"#;

    #[test]
    fn test_first_text() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(
            doc.first_text("title").as_deref(),
            Some("  Blue Door Bistro  ")
        );
        assert_eq!(doc.first_text("h1"), None);
    }

    #[test]
    fn test_attr() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(
            doc.attr(r#"meta[name="description"]"#, "content").as_deref(),
            Some("Seasonal plates")
        );
        assert_eq!(doc.attr(r#"meta[name="robots"]"#, "content"), None);
    }

    #[test]
    fn test_count() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.count("img"), 2);
        assert_eq!(doc.count("img[alt]"), 1);
        assert_eq!(doc.count(r#"meta[property^="og:"]"#), 1);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.count("img[["), 0);
        assert_eq!(doc.first_text(":::"), None);
    }
}
