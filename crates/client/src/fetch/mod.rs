//! HTTP fetch of the published catalog sheet.
//!
//! ### Behavior
//! - The source URL is canonicalized once, at construction.
//! - Any non-2xx status, network failure or timeout is `SOURCE_UNAVAILABLE`.
//! - Bodies larger than `max_bytes` are rejected as `SOURCE_TOO_LARGE`.
//! - The body is decoded as lossy UTF-8 with a leading BOM removed.
//!
//! No retries: a failed fetch surfaces to the caller and the next search tries again.

pub mod url;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use std::time::{Duration, Instant};

pub use url::{UrlError, canonicalize};

use vidcat_core::{AppConfig, CsvSource, Error};

/// Configuration for the sheet client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "vidcat/0.1")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,

    /// Bypass any system proxy (default: false)
    pub no_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "vidcat/0.1".to_string(),
            max_bytes: 5 * 1024 * 1024,
            timeout: Duration::from_millis(20000),
            max_redirects: 5,
            no_proxy: false,
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            ..Default::default()
        }
    }
}

/// Downloads the catalog CSV from a fixed URL.
pub struct SheetClient {
    http: Client,
    config: FetchConfig,
    source_url: Url,
}

impl SheetClient {
    /// Create a client for `source_url`.
    pub fn new(source_url: &str, config: FetchConfig) -> Result<Self, Error> {
        let source_url = canonicalize(source_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .deflate(true);
        if config.no_proxy {
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| Error::SourceUnavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config, source_url })
    }

    /// The canonical URL this client reads from.
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    /// Fetch the sheet and return its text.
    pub async fn fetch_text(&self) -> Result<String, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(self.source_url.as_str())
            .header(header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::SourceUnavailable(format!("status {}", status.as_u16())));
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::SourceTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(&e))?;

        if bytes.len() > self.config.max_bytes {
            return Err(Error::SourceTooLarge(format!("{} bytes exceeds {}", bytes.len(), self.config.max_bytes)));
        }

        let text = String::from_utf8_lossy(&bytes);
        let text = text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string();

        tracing::debug!(
            url = %self.source_url,
            fetch_ms = start.elapsed().as_millis() as u64,
            bytes = bytes.len(),
            "fetched catalog sheet"
        );

        Ok(text)
    }

    fn transport_error(&self, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::SourceUnavailable(format!("timed out after {}ms", self.config.timeout.as_millis()))
        } else {
            Error::SourceUnavailable(format!("network error: {}", err))
        }
    }
}

#[async_trait]
impl CsvSource for SheetClient {
    async fn fetch_csv(&self) -> Result<String, Error> {
        self.fetch_text().await
    }
}
