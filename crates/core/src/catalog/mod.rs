//! In-memory video catalog sourced from a published spreadsheet.
//!
//! The catalog is a read-through cache over CSV text:
//!
//! - [`csv`] turns raw CSV text into column-keyed [`Row`]s
//! - [`freshness`] holds the last loaded rows and reloads them lazily once the TTL lapses
//! - [`search`] projects rows into [`VideoRecord`]s and filters them by substring

pub mod csv;
pub mod freshness;
pub mod search;

pub use csv::{Row, parse_rows};
pub use freshness::{CacheState, Clock, CsvSource, FreshnessCache, SystemClock, is_stale};
pub use search::{ColumnConfig, VideoRecord, search};
