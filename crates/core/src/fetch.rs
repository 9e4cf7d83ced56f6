//! Content fetching from URLs, files, and stdin.
//!
//! This module retrieves raw HTML (or plain text) for the pipeline and the
//! CLI: HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use tracing::debug;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{Result, TextGaugeError};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Textgauge/0.1)".to_string() }
    }
}

/// Returns true for inputs that should be fetched over the network.
pub fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Fetches HTML content from a URL.
///
/// Redirects are followed. Any non-success status is an error, so callers
/// never score an error page.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| TextGaugeError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(TextGaugeError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http or https)",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(TextGaugeError::HttpError)?;

    debug!(%url, "fetching");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| {
            if e.is_timeout() {
                TextGaugeError::Timeout { timeout: config.timeout }
            } else {
                TextGaugeError::HttpError(e)
            }
        })?;

    let content = response.text().await?;
    debug!(%url, bytes = content.len(), "fetched");

    Ok(content)
}

/// Reads content from a local file.
///
/// Invalid UTF-8 is replaced rather than rejected, matching how remote pages
/// in legacy encodings still decode.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        return Err(TextGaugeError::FileNotFound(path_buf));
    }

    let bytes = fs::read(&path_buf)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(TextGaugeError::from)?;

    Ok(buffer)
}
