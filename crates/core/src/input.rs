//! Article input table.
//!
//! The batch input is a spreadsheet (`.xlsx`, `.xls`, `.ods`; first sheet) or
//! a CSV file, with a header row containing `URL_ID` and `URL` columns.
//! Other columns are ignored and column order does not matter.

use std::fs::File;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::{Result, TextGaugeError};

/// One article to process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSource {
    /// Identifier used for the text file name and the report row.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// Page address, or a local HTML path.
    #[serde(rename = "URL")]
    pub url: String,
}

impl ArticleSource {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url_id: url_id.into(), url: url.into() }
    }
}

/// Reads every row of the input table at `path`.
///
/// Workbook extensions are read with the spreadsheet reader, anything else
/// is parsed as CSV.
///
/// # Errors
///
/// Returns [`TextGaugeError::FileNotFound`] if the file is missing and
/// [`TextGaugeError::InputError`] if the workbook cannot be opened, a
/// required column is absent, or a row cannot be read.
pub fn read_sources<P: AsRef<Path>>(path: P) -> Result<Vec<ArticleSource>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TextGaugeError::FileNotFound(path.to_path_buf()));
    }

    let sources = if is_workbook(path) { read_workbook(path)? } else { read_sources_from(File::open(path)?)? };
    debug!(rows = sources.len(), path = %path.display(), "read input table");

    Ok(sources)
}

/// Reads article rows from any CSV reader.
pub fn read_sources_from<R: std::io::Read>(reader: R) -> Result<Vec<ArticleSource>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader.headers().map_err(|e| TextGaugeError::InputError(e.to_string()))?.clone();
    for column in ["URL_ID", "URL"] {
        if !headers.iter().any(|h| h == column) {
            return Err(TextGaugeError::InputError(format!("missing column '{}'", column)));
        }
    }

    let mut sources = Vec::new();
    for (index, row) in reader.deserialize::<ArticleSource>().enumerate() {
        // Header is line 1.
        let source = row.map_err(|e| TextGaugeError::InputError(format!("row {}: {}", index + 2, e)))?;
        sources.push(source);
    }

    Ok(sources)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "xlsx" | "xlsm" | "xls" | "ods"))
}

/// Reads article rows from the first sheet of a workbook.
fn read_workbook(path: &Path) -> Result<Vec<ArticleSource>> {
    let input_error = |e: calamine::Error| TextGaugeError::InputError(format!("{}: {}", path.display(), e));

    let mut workbook = open_workbook_auto(path).map_err(input_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TextGaugeError::InputError(format!("{}: workbook has no sheets", path.display())))?
        .map_err(input_error)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows.next().map(|row| row.iter().map(cell_text).collect()).unwrap_or_default();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TextGaugeError::InputError(format!("missing column '{}'", name)))
    };
    let url_id_column = column("URL_ID")?;
    let url_column = column("URL")?;

    let mut sources = Vec::new();
    for row in rows {
        let cell = |index: usize| row.get(index).map(cell_text).unwrap_or_default();
        let (url_id, url) = (cell(url_id_column), cell(url_column));
        // Blank rows.
        if url_id.is_empty() && url.is_empty() {
            continue;
        }
        sources.push(ArticleSource::new(url_id, url));
    }

    Ok(sources)
}

/// Numeric ids come back as floats; `123.0` displays as `123`.
fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sources() {
        let data = "URL_ID,URL\nblackassign0001,https://example.com/a\nblackassign0002,https://example.com/b\n";
        let sources = read_sources_from(data.as_bytes()).unwrap();

        assert_eq!(
            sources,
            vec![
                ArticleSource::new("blackassign0001", "https://example.com/a"),
                ArticleSource::new("blackassign0002", "https://example.com/b"),
            ]
        );
    }

    #[test]
    fn test_extra_columns_ignored() {
        let data = "URL,Notes,URL_ID\nhttps://example.com/a,first,7\n";
        let sources = read_sources_from(data.as_bytes()).unwrap();
        assert_eq!(sources, vec![ArticleSource::new("7", "https://example.com/a")]);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let data = "URL_ID , URL\n 12 , https://example.com/x \n";
        let sources = read_sources_from(data.as_bytes()).unwrap();
        assert_eq!(sources, vec![ArticleSource::new("12", "https://example.com/x")]);
    }

    #[test]
    fn test_missing_column() {
        let result = read_sources_from("ID,URL\n1,https://example.com\n".as_bytes());
        assert!(matches!(result, Err(TextGaugeError::InputError(msg)) if msg.contains("URL_ID")));
    }

    #[test]
    fn test_workbook_extension() {
        assert!(is_workbook(Path::new("Input.xlsx")));
        assert!(is_workbook(Path::new("data/Input.XLS")));
        assert!(!is_workbook(Path::new("Input.csv")));
        assert!(!is_workbook(Path::new("Input")));
    }

    #[test]
    fn test_missing_file() {
        let result = read_sources("/nonexistent/Input.csv");
        assert!(matches!(result, Err(TextGaugeError::FileNotFound(_))));
    }
}
