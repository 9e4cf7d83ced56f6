//! Article text extraction.
//!
//! An article is its first `<h1>` plus the text of every `<p>` on the page.
//! There is no content scoring: boilerplate paragraphs in headers and footers
//! are included, which keeps the word counts comparable across runs.

use tracing::debug;

use crate::parse::Document;
use crate::Result;

/// Title and body text pulled from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Text of the first `<h1>`, or empty.
    pub title: String,
    /// Text of every `<p>`, joined with single spaces.
    pub body: String,
}

impl ExtractedArticle {
    /// The text handed to the metrics engine: title and body on separate
    /// lines.
    pub fn text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }

    /// True when the page had neither a heading nor paragraph text.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.trim().is_empty()
    }
}

/// Extracts the title and paragraph text of a parsed page.
///
/// # Example
///
/// ```rust
/// use textgauge_core::{Document, extract_article};
///
/// let doc = Document::parse("<h1>News</h1><p>First.</p><p>Second.</p>").unwrap();
/// let article = extract_article(&doc).unwrap();
/// assert_eq!(article.text(), "News\nFirst. Second.");
/// ```
pub fn extract_article(doc: &Document) -> Result<ExtractedArticle> {
    let title = doc.select_first("h1")?.map(|h1| h1.stripped_text()).unwrap_or_default();

    let paragraphs: Vec<String> = doc.select("p")?.iter().map(|p| p.stripped_text()).collect();
    let body = paragraphs.join(" ");

    debug!(paragraphs = paragraphs.len(), title_chars = title.len(), "extracted article");

    Ok(ExtractedArticle { title, body })
}

/// Parses `html` and extracts its article text in one step.
pub fn extract_article_from_html(html: &str) -> Result<ExtractedArticle> {
    let doc = Document::parse(html)?;
    extract_article(&doc)
}
