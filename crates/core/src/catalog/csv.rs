//! Minimal CSV row loader.
//!
//! Cells are split on commas with no quoting rules beyond stripping one pair of
//! enclosing double quotes, so embedded delimiters and multi-line cells are not supported.

use std::collections::HashMap;

const DELIMITER: char = ',';

/// One catalog record keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Value of `column`, or `""` when the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// Number of columns, one per distinct header.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a row built from no headers.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Parse CSV text into rows keyed by the header line.
///
/// Blank lines are dropped before the header is picked. Fewer than two remaining
/// lines is an empty catalog, not an error. Short lines pad with `""`, extra cells are dropped.
/// A header repeated twice keeps the value of its last occurrence.
pub fn parse_rows(csv_text: &str) -> Vec<Row> {
    let lines: Vec<&str> = csv_text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Vec::new();
    };
    if data_lines.is_empty() {
        tracing::debug!("csv source has a header but no data lines");
        return Vec::new();
    }

    let headers: Vec<&str> = split_cells(header_line).collect();

    let rows: Vec<Row> = data_lines
        .iter()
        .map(|line| {
            let mut cells = split_cells(line);
            headers
                .iter()
                .map(|header| (*header, cells.next().unwrap_or("")))
                .collect::<Row>()
        })
        .collect();

    tracing::debug!(columns = headers.len(), rows = rows.len(), "parsed csv rows");
    rows
}

fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITER).map(clean_cell)
}

/// Trim whitespace, then strip a single pair of enclosing double quotes.
fn clean_cell(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}
