//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.
//! Catalog settings (column names, result count) are taken as given.

use std::ops::RangeInclusive;

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

/// Sheet fetch timeout bounds in milliseconds.
const TIMEOUT_MS_RANGE: RangeInclusive<u64> = 100..=300_000;

/// Sheet body size bounds in bytes (up to 50MB).
const MAX_BYTES_RANGE: RangeInclusive<usize> = 1..=50 * 1024 * 1024;

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field: field.into(), reason: reason.into() }
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// Only the sheet fetch settings can be rejected. A non-positive TTL or a
    /// zero result count is legal and only logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `max_bytes` is 0 or exceeds 50MB
    /// - `timeout_ms` is outside 100ms..=5 minutes
    /// - `user_agent` is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !MAX_BYTES_RANGE.contains(&self.max_bytes) {
            return Err(invalid("max_bytes", "must be between 1 byte and 50MB"));
        }

        if !TIMEOUT_MS_RANGE.contains(&self.timeout_ms) {
            return Err(invalid("timeout_ms", "must be between 100ms and 5 minutes (300000ms)"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(invalid("user_agent", "must not be blank"));
        }

        if self.cache_ttl_seconds <= 0 {
            tracing::warn!(
                cache_ttl_seconds = self.cache_ttl_seconds,
                "cache_ttl_seconds is not positive; every search will reload the catalog"
            );
        }

        if self.max_results == 0 {
            tracing::warn!("max_results is 0; searches will always return no videos");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_field(config: &AppConfig) -> Option<String> {
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_timeout_bounds_are_inclusive() {
        for timeout_ms in [100, 300_000] {
            let config = AppConfig { timeout_ms, ..Default::default() };
            assert!(config.validate().is_ok(), "{timeout_ms}ms should be accepted");
        }
        for timeout_ms in [0, 99, 300_001] {
            let config = AppConfig { timeout_ms, ..Default::default() };
            assert_eq!(rejected_field(&config).as_deref(), Some("timeout_ms"), "{timeout_ms}ms");
        }
    }

    #[test]
    fn test_sheet_size_bounds_are_inclusive() {
        let fifty_mb = 50 * 1024 * 1024;
        for max_bytes in [1, fifty_mb] {
            let config = AppConfig { max_bytes, ..Default::default() };
            assert!(config.validate().is_ok(), "{max_bytes} bytes should be accepted");
        }
        for max_bytes in [0, fifty_mb + 1] {
            let config = AppConfig { max_bytes, ..Default::default() };
            assert_eq!(rejected_field(&config).as_deref(), Some("max_bytes"), "{max_bytes} bytes");
        }
    }

    #[test]
    fn test_blank_user_agent_rejected() {
        let config = AppConfig { user_agent: "  ".into(), ..Default::default() };
        assert_eq!(rejected_field(&config).as_deref(), Some("user_agent"));
    }

    #[test]
    fn test_catalog_settings_never_rejected() {
        let config = AppConfig {
            cache_ttl_seconds: -5,
            max_results: 0,
            title_column: String::new(),
            description_column: String::new(),
            url_column: String::new(),
            sheet_csv_url: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
