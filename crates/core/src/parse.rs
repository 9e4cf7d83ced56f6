//! HTML parsing and element selection.
//!
//! This module provides the [`Document`] and [`Element`] types, thin
//! wrappers around `scraper` used by article extraction.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::parse::Document;
//!
//! let doc = Document::parse("<h1>Title</h1><p class=\"lead\">Paragraph</p>").unwrap();
//! let paragraphs = doc.select("p.lead").unwrap();
//! assert_eq!(paragraphs[0].text(), "Paragraph");
//! ```

use scraper::{Html, Selector};

use crate::{Result, TextGaugeError};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup still yields a document.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`TextGaugeError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Returns the first element matching a CSS selector.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| TextGaugeError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A single element of a [`Document`].
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text of this element with every text node trimmed and
    /// empty nodes dropped, joined without separators.
    ///
    /// Adjacent inline nodes run together: `<p>Hello <b>world</b></p>`
    /// becomes `Helloworld`. Article text has always been built this way and
    /// reported word counts depend on it.
    pub fn stripped_text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>  Heading  </h1>
            <p class="content">Paragraph 1</p>
            <p class="content">Hello <b>world</b> again</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
    }

    #[test]
    fn test_select_first() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let heading = doc.select_first("h1").unwrap().unwrap();
        assert_eq!(heading.stripped_text(), "Heading");
        assert!(doc.select_first("h2").unwrap().is_none());
    }

    #[test]
    fn test_stripped_text_joins_nodes() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p").unwrap();
        assert_eq!(elements[1].stripped_text(), "Helloworldagain");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(TextGaugeError::HtmlParseError(_))));
    }
}
