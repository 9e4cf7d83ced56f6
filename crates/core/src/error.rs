//! Error types for textgauge operations.
//!
//! The metrics core itself is total over any input text, so every variant
//! here belongs to the I/O boundary: lexicon loading, fetching, extraction,
//! input tables and report writing.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::{TextGaugeError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(TextGaugeError::NoContent);
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for textgauge operations.
#[derive(Error, Debug)]
pub enum TextGaugeError {
    /// HTTP request errors from reqwest.
    ///
    /// Covers DNS and connection failures as well as non-success status codes.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Nothing to analyze: the page yielded no title and no paragraph text,
    /// or the supplied text was blank.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors for reads and writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required word list could not be loaded.
    ///
    /// This is fatal at startup: metrics cannot be computed without the
    /// stop word and sentiment lists.
    #[error("Failed to load lexicon from {}: {reason}", path.display())]
    LexiconError { path: PathBuf, reason: String },

    /// The article input table is missing a column or has a malformed row.
    #[error("Invalid input table: {0}")]
    InputError(String),

    /// CSV reading or writing errors.
    #[error("Report error: {0}")]
    ReportError(#[from] csv::Error),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for TextGaugeError.
pub type Result<T> = std::result::Result<T, TextGaugeError>;
