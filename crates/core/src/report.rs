//! Report and article text output.
//!
//! The report is a CSV file with one row per processed article: `URL_ID`,
//! `URL`, then the thirteen metric columns in [`MetricName::ALL`] order.
//! Counts are written as integers and ratios with the shortest
//! representation that round-trips (`1.0`, `0.3333333333333333`).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use crate::input::ArticleSource;
use crate::metrics::{MetricName, Metrics};
use crate::{Result, TextGaugeError};

/// One processed article.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub url_id: String,
    pub url: String,
    pub metrics: Metrics,
}

impl ReportRow {
    pub fn new(source: &ArticleSource, metrics: Metrics) -> Self {
        Self { url_id: source.url_id.clone(), url: source.url.clone(), metrics }
    }

    fn record(&self) -> Vec<String> {
        let mut record = vec![self.url_id.clone(), self.url.clone()];
        record.extend(MetricName::ALL.iter().map(|&name| format_metric(&self.metrics, name)));
        record
    }
}

/// Column headers of the report, in order.
pub fn report_headers() -> Vec<&'static str> {
    let mut headers = vec!["URL_ID", "URL"];
    headers.extend(MetricName::ALL.iter().map(|name| name.label()));
    headers
}

/// Formats one metric the way it appears in the report.
pub fn format_metric(metrics: &Metrics, name: MetricName) -> String {
    let value = metrics.value(name);
    if name.is_count() { format!("{}", value as u64) } else { format!("{:?}", value) }
}

/// Writes the report as CSV to any writer.
///
/// The header row is always written, even with no rows.
pub fn write_report_to<W: Write>(writer: W, rows: &[ReportRow]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record(report_headers())?;
    for row in rows {
        writer.write_record(row.record())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, rows: &[ReportRow]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_report_to(file, rows)?;
    debug!(rows = rows.len(), path = %path.display(), "wrote report");

    Ok(())
}

/// Saves an article's text as `<dir>/<url_id>.txt`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`TextGaugeError::InputError`] for an id that could name a file
/// outside `dir`: empty, `.`, `..`, or containing a path separator.
pub fn write_article_text<P: AsRef<Path>>(dir: P, url_id: &str, text: &str) -> Result<PathBuf> {
    if url_id.is_empty() || url_id == "." || url_id == ".." || url_id.contains(['/', '\\']) {
        return Err(TextGaugeError::InputError(format!("invalid URL_ID '{}' for an article file name", url_id)));
    }

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.txt", url_id));
    fs::write(&path, text)?;

    Ok(path)
}
