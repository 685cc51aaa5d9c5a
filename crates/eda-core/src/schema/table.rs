//! Table-level summary and missingness types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::ColumnSummary;

/// Summary of an entire dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of data rows.
    pub n_rows: usize,
    /// Number of columns.
    pub n_cols: usize,
    /// One summary per column, in table order.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Get a column summary by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Numeric columns, in table order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter().filter(|c| c.is_numeric())
    }

    /// Categorical columns, in table order.
    pub fn categorical_columns(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter().filter(|c| c.is_categorical())
    }
}

/// Missing figures for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub missing_count: usize,
    pub missing_share: f64,
}

/// Missing counts and shares keyed by column name, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingTable {
    entries: IndexMap<String, MissingEntry>,
}

impl MissingTable {
    /// Create a table from ordered entries.
    pub fn new(entries: IndexMap<String, MissingEntry>) -> Self {
        Self { entries }
    }

    /// Look up a column.
    pub fn get(&self, column: &str) -> Option<&MissingEntry> {
        self.entries.get(column)
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MissingEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no columns are covered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest missing share across columns (0.0 when empty).
    pub fn max_share(&self) -> f64 {
        self.entries
            .values()
            .map(|e| e.missing_share)
            .fold(0.0, f64::max)
    }

    /// Mean missing share across columns (0.0 when empty).
    pub fn average_share(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.values().map(|e| e.missing_share).sum::<f64>() / self.entries.len() as f64
    }

    /// Columns whose missing share is at least `threshold`, in table order.
    pub fn columns_at_least(&self, threshold: f64) -> Vec<&str> {
        self.iter()
            .filter(|(_, e)| e.missing_count > 0 && e.missing_share >= threshold)
            .map(|(name, _)| name)
            .collect()
    }
}

impl std::ops::Index<&str> for MissingTable {
    type Output = MissingEntry;

    fn index(&self, column: &str) -> &MissingEntry {
        &self.entries[column]
    }
}
