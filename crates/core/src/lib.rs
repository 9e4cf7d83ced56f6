pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod input;
pub mod lexicon;
pub mod metrics;
pub mod parse;
#[cfg(feature = "fetch")]
pub mod pipeline;
pub mod report;
pub mod syllables;
pub mod tokenize;

pub use error::{Result, TextGaugeError};
pub use extract::{ExtractedArticle, extract_article, extract_article_from_html};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin, is_remote};
pub use formatters::{metrics_to_json, metrics_to_text};
pub use input::{ArticleSource, read_sources, read_sources_from};
pub use lexicon::{Lexicon, LexiconPaths};
pub use metrics::{EPSILON, MetricName, Metrics, MetricsEngine};
pub use parse::Document;
#[cfg(feature = "fetch")]
pub use pipeline::{Pipeline, PipelineConfig, PipelineConfigBuilder, PipelineOutcome, SkippedArticle};
pub use report::{ReportRow, format_metric, report_headers, write_article_text, write_report, write_report_to};
pub use syllables::count_syllables;
