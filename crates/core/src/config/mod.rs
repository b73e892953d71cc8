//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (VIDCAT_*)
//! 2. TOML config file (if VIDCAT_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::catalog::ColumnConfig;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (VIDCAT_*)
/// 2. TOML config file (if VIDCAT_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Published CSV export URL of the catalog spreadsheet.
    ///
    /// Set via VIDCAT_SHEET_CSV_URL environment variable.
    #[serde(default)]
    pub sheet_csv_url: Option<String>,

    /// Seconds a loaded catalog stays fresh before the next search reloads it.
    ///
    /// Set via VIDCAT_CACHE_TTL_SECONDS environment variable.
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: i64,

    /// Maximum number of videos returned per search.
    ///
    /// Set via VIDCAT_MAX_RESULTS environment variable.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Column holding the video title.
    ///
    /// Set via VIDCAT_TITLE_COLUMN environment variable.
    #[serde(default = "default_title_column")]
    pub title_column: String,

    /// Column holding the video description.
    ///
    /// Set via VIDCAT_DESCRIPTION_COLUMN environment variable.
    #[serde(default = "default_description_column")]
    pub description_column: String,

    /// Column holding the video URL.
    ///
    /// Set via VIDCAT_URL_COLUMN environment variable.
    #[serde(default = "default_url_column")]
    pub url_column: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via VIDCAT_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via VIDCAT_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum bytes accepted from the CSV source.
    ///
    /// Set via VIDCAT_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_cache_ttl_seconds() -> i64 {
    900
}

fn default_max_results() -> usize {
    3
}

fn default_title_column() -> String {
    "OU Sooners videos".into()
}

fn default_description_column() -> String {
    "Description".into()
}

fn default_url_column() -> String {
    "URL".into()
}

fn default_user_agent() -> String {
    "vidcat/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_csv_url: None,
            cache_ttl_seconds: default_cache_ttl_seconds(),
            max_results: default_max_results(),
            title_column: default_title_column(),
            description_column: default_description_column(),
            url_column: default_url_column(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The configured column-name mapping used to project rows into videos.
    pub fn columns(&self) -> ColumnConfig {
        ColumnConfig {
            title: self.title_column.clone(),
            description: self.description_column.clone(),
            url: self.url_column.clone(),
        }
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `VIDCAT_`
    /// 2. TOML file from `VIDCAT_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("VIDCAT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("VIDCAT_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Return the sheet URL, or a hint on how to set it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if no sheet URL is configured.
    pub fn require_sheet_csv_url(&self) -> Result<&str, ConfigError> {
        self.sheet_csv_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "sheet_csv_url".into(),
                hint: "Set VIDCAT_SHEET_CSV_URL environment variable".into(),
            })
    }
}
