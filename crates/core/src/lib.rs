//! Core types and shared functionality for vidcat.
//!
//! This crate provides:
//! - The video catalog: CSV row loading, the freshness cache and substring search
//! - Unified error types
//! - Configuration structures

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{
    CacheState, Clock, ColumnConfig, CsvSource, FreshnessCache, Row, SystemClock, VideoRecord, is_stale, parse_rows,
    search,
};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
