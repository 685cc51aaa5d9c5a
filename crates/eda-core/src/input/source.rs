//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}

/// Parsed tabular data.
///
/// Cells are kept as raw text. A cell is missing when
/// [`DataTable::is_null_value`] says so; numeric interpretation happens on
/// demand through [`DataTable::parse_numeric`].
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    ///
    /// Repeated header names get a `.1`, `.2`, ... suffix so that every
    /// column can be addressed by name.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers: unique_headers(headers),
            rows,
            delimiter,
        }
    }

    /// Build a table from named columns, `None` marking a missing cell.
    ///
    /// Shorter columns are padded with missing cells up to the longest one.
    ///
    /// ```
    /// use eda_core::DataTable;
    ///
    /// let table = DataTable::from_columns(vec![
    ///     ("age", vec![Some("10"), Some("20"), None]),
    ///     ("city", vec![Some("A"), Some("B"), Some("A")]),
    /// ]);
    /// assert_eq!(table.row_count(), 3);
    /// assert_eq!(table.null_count(0), 1);
    /// ```
    pub fn from_columns(columns: Vec<(&str, Vec<Option<&str>>)>) -> Self {
        let row_count = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        let headers = columns.iter().map(|(name, _)| name.to_string()).collect();

        let rows = (0..row_count)
            .map(|row| {
                columns
                    .iter()
                    .map(|(_, values)| {
                        values
                            .get(row)
                            .copied()
                            .flatten()
                            .map(str::to_string)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self::new(headers, rows, b',')
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| {
            row.get(index)
                .map(|s| s.as_str())
                .unwrap_or("")
        })
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Trimmed non-null values of a column, in row order.
    pub fn non_null_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.column_values(index)
            .filter(|v| !Self::is_null_value(v))
            .map(str::trim)
    }

    /// Count the missing cells of a column.
    pub fn null_count(&self, index: usize) -> usize {
        self.column_values(index)
            .filter(|v| Self::is_null_value(v))
            .count()
    }

    /// Numeric view of a column, aligned with the rows.
    ///
    /// Missing and non-numeric cells become `None`.
    pub fn numeric_cells(&self, index: usize) -> Vec<Option<f64>> {
        self.column_values(index)
            .map(|v| {
                if Self::is_null_value(v) {
                    None
                } else {
                    Self::parse_numeric(v)
                }
            })
            .collect()
    }

    /// Frequency of each non-null value, in first-encountered order.
    pub fn value_counts(&self, index: usize) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in self.non_null_values(index) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }

    /// Parse a cell as a finite number.
    pub fn parse_numeric(value: &str) -> Option<f64> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }

    /// Key used to decide whether two non-null cells hold the same value.
    ///
    /// Numeric cells compare by value, so `10`, `10.0` and `1e1` share a key.
    /// Everything else compares by trimmed text.
    pub fn value_key(value: &str, numeric: bool) -> String {
        let trimmed = value.trim();
        if numeric {
            if let Some(n) = Self::parse_numeric(trimmed) {
                // -0.0 and 0.0 are the same value
                let n = if n == 0.0 { 0.0 } else { n };
                return format!("{n}");
            }
        }
        trimmed.to_string()
    }
}

/// Rename repeated headers: `a, a, a` becomes `a, a.1, a.2`.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::with_capacity(headers.len());
    for header in headers {
        if seen.contains(&header) {
            let renamed = (1..)
                .map(|n| format!("{}.{}", header, n))
                .find(|candidate| !seen.contains(candidate))
                .unwrap_or_default();
            debug!(column = %header, renamed = %renamed, "Renamed duplicate column");
            seen.insert(renamed);
        } else {
            seen.insert(header);
        }
    }
    seen.into_iter().collect()
}
