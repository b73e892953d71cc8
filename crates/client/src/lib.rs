//! Client code for vidcat.
//!
//! This crate provides the HTTP fetch side of the catalog: it downloads the
//! published spreadsheet as CSV text for the core freshness cache.

pub mod fetch;

pub use fetch::{FetchConfig, SheetClient, UrlError, canonicalize};
