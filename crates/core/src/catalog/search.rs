//! Bounded substring search over catalog rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::csv::Row;

/// Names of the columns projected into a [`VideoRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self { title: "OU Sooners videos".into(), description: "Description".into(), url: "URL".into() }
    }
}

/// A catalog entry as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoRecord {
    /// Video title.
    pub title: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Video URL exactly as it appears in the sheet.
    pub url: String,
}

impl VideoRecord {
    /// Project `row` through `columns`. Rows without a title or URL are not videos.
    pub fn from_row(row: &Row, columns: &ColumnConfig) -> Option<Self> {
        let title = row.get(&columns.title).trim();
        let url = row.get(&columns.url).trim();
        if title.is_empty() || url.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            description: row.get(&columns.description).trim().to_string(),
            url: url.to_string(),
        })
    }

    fn matches(&self, needle: &str) -> bool {
        format!("{} {}", self.title, self.description)
            .to_lowercase()
            .contains(needle)
    }
}

/// Find up to `max_results` videos whose "title description" text contains `query`.
///
/// Matching is case-insensitive substring search with the query taken as-is,
/// surrounding whitespace included. Results keep row order. A blank query matches nothing.
pub fn search(query: &str, rows: &[Row], max_results: usize, columns: &ColumnConfig) -> Vec<VideoRecord> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    rows.iter()
        .filter_map(|row| VideoRecord::from_row(row, columns))
        .filter(|video| video.matches(&needle))
        .take(max_results)
        .collect()
}
