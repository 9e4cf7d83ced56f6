//! Batch processing of article sources.
//!
//! The pipeline walks the input rows one at a time: fetch, extract, save the
//! text, compute metrics. A failure on one article never stops the batch; it
//! is logged and recorded in [`PipelineOutcome::skipped`].
//!
//! # Example
//!
//! ```rust,no_run
//! use textgauge_core::{ArticleSource, Lexicon, MetricsEngine, Pipeline, PipelineConfig};
//!
//! # async fn example() -> textgauge_core::Result<()> {
//! let engine = MetricsEngine::new(Lexicon::default());
//! let pipeline = Pipeline::new(engine, PipelineConfig::builder().articles_dir("out/articles").build());
//! let outcome = pipeline.run(&[ArticleSource::new("1", "https://example.com/post")]).await;
//! println!("{} processed, {} skipped", outcome.rows.len(), outcome.skipped.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::extract::extract_article_from_html;
use crate::fetch::{FetchConfig, fetch_file, fetch_url, is_remote};
use crate::input::ArticleSource;
use crate::metrics::MetricsEngine;
use crate::report::{ReportRow, write_article_text};
use crate::{Result, TextGaugeError};

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// HTTP settings for remote sources.
    pub fetch: FetchConfig,
    /// Directory receiving `<URL_ID>.txt` files (default: `articles`).
    pub articles_dir: PathBuf,
    /// Whether to save extracted text (default: true).
    pub save_articles: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { fetch: FetchConfig::default(), articles_dir: PathBuf::from("articles"), save_articles: true }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

/// Builder for PipelineConfig.
///
/// # Example
///
/// ```rust
/// use textgauge_core::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .timeout(10)
///     .articles_dir("texts")
///     .save_articles(false)
///     .build();
/// assert_eq!(config.fetch.timeout, 10);
/// ```
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    /// Replaces the whole fetch configuration.
    pub fn fetch(mut self, value: FetchConfig) -> Self {
        self.config.fetch = value;
        self
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    pub fn articles_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.articles_dir = value.into();
        self
    }

    pub fn save_articles(mut self, value: bool) -> Self {
        self.config.save_articles = value;
        self
    }

    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An article that produced no report row.
#[derive(Debug)]
pub struct SkippedArticle {
    pub url_id: String,
    pub url: String,
    pub reason: TextGaugeError,
}

/// Result of a pipeline run.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    /// Report rows, in input order.
    pub rows: Vec<ReportRow>,
    /// Articles that failed or had no content, in input order.
    pub skipped: Vec<SkippedArticle>,
}

/// Sequential fetch, extract and score pipeline.
pub struct Pipeline {
    engine: MetricsEngine,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(engine: MetricsEngine, config: PipelineConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &MetricsEngine {
        &self.engine
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Processes every source in order.
    pub async fn run(&self, sources: &[ArticleSource]) -> PipelineOutcome {
        let mut outcome = PipelineOutcome::default();

        for source in sources {
            match self.process(source).await {
                Ok(row) => outcome.rows.push(row),
                Err(reason) => {
                    warn!(url_id = %source.url_id, url = %source.url, error = %reason, "skipping article");
                    outcome.skipped.push(SkippedArticle {
                        url_id: source.url_id.clone(),
                        url: source.url.clone(),
                        reason,
                    });
                }
            }
        }

        info!(processed = outcome.rows.len(), skipped = outcome.skipped.len(), "batch finished");
        outcome
    }

    /// Processes one source.
    ///
    /// Returns [`TextGaugeError::NoContent`] without computing metrics when
    /// the page has no heading and no paragraph text.
    pub async fn process(&self, source: &ArticleSource) -> Result<ReportRow> {
        let html = self.load(&source.url).await?;
        let article = extract_article_from_html(&html)?;

        if article.is_empty() {
            return Err(TextGaugeError::NoContent);
        }

        let text = article.text();
        if self.config.save_articles {
            let path = write_article_text(&self.config.articles_dir, &source.url_id, &text)?;
            debug!(url_id = %source.url_id, path = %path.display(), "saved article text");
        }

        let metrics = self.engine.compute(&text);
        debug!(url_id = %source.url_id, words = metrics.word_count, sentences = metrics.sentence_count, "scored");

        Ok(ReportRow::new(source, metrics))
    }

    async fn load(&self, location: &str) -> Result<String> {
        if is_remote(location) { fetch_url(location, &self.config.fetch).await } else { fetch_file(location) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;
    use std::fs;
    use tempfile::TempDir;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Runtime::new().unwrap().block_on(future)
    }

    fn write_page(dir: &TempDir, name: &str, html: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, html).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn pipeline(articles_dir: PathBuf) -> Pipeline {
        let engine = MetricsEngine::new(Lexicon::new(["i", "we", "this", "that"], ["love"], ["hate"]));
        Pipeline::new(engine, PipelineConfig::builder().articles_dir(articles_dir).build())
    }

    #[test]
    fn test_builder_defaults() {
        let config = PipelineConfig::builder().build();
        assert_eq!(config.articles_dir, PathBuf::from("articles"));
        assert!(config.save_articles);
        assert_eq!(config.fetch.timeout, 30);
    }

    #[test]
    fn test_run_processes_and_skips() {
        let tmp = TempDir::new().unwrap();
        let good = write_page(&tmp, "good.html", "<h1>Feelings</h1><p>I love this. We hate that.</p>");
        let empty = write_page(&tmp, "empty.html", "<div>navigation only</div>");
        let missing = tmp.path().join("missing.html").to_string_lossy().into_owned();

        let articles_dir = tmp.path().join("articles");
        let sources = vec![
            ArticleSource::new("1", good),
            ArticleSource::new("2", empty),
            ArticleSource::new("3", missing),
        ];

        let outcome = block_on(pipeline(articles_dir.clone()).run(&sources));

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].url_id, "1");
        assert_eq!(outcome.rows[0].metrics.positive_score, 1);
        assert_eq!(outcome.rows[0].metrics.negative_score, 1);

        assert_eq!(outcome.skipped.len(), 2);
        assert!(matches!(outcome.skipped[0].reason, TextGaugeError::NoContent));
        assert!(matches!(outcome.skipped[1].reason, TextGaugeError::FileNotFound(_)));

        let saved = fs::read_to_string(articles_dir.join("1.txt")).unwrap();
        assert_eq!(saved, "Feelings\nI love this. We hate that.");
        assert!(!articles_dir.join("2.txt").exists());
    }

    #[test]
    fn test_unsafe_url_id_skipped() {
        let tmp = TempDir::new().unwrap();
        let page = write_page(&tmp, "page.html", "<p>Plain words here.</p>");
        let articles_dir = tmp.path().join("articles");

        let outcome = block_on(pipeline(articles_dir).run(&[ArticleSource::new("../outside", page)]));

        assert!(outcome.rows.is_empty());
        assert!(matches!(outcome.skipped[0].reason, TextGaugeError::InputError(_)));
        assert!(!tmp.path().join("outside.txt").exists());
    }

    #[test]
    fn test_save_articles_disabled() {
        let tmp = TempDir::new().unwrap();
        let page = write_page(&tmp, "page.html", "<p>Plain words here.</p>");
        let articles_dir = tmp.path().join("articles");

        let engine = MetricsEngine::new(Lexicon::default());
        let config = PipelineConfig::builder().articles_dir(&articles_dir).save_articles(false).build();
        let row = block_on(Pipeline::new(engine, config).process(&ArticleSource::new("9", page))).unwrap();

        assert_eq!(row.metrics.word_count, 3);
        assert!(!articles_dir.exists());
    }
}
