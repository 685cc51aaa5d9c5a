//! Per-column summary and statistics.

use serde::{Deserialize, Serialize};

use super::types::ColumnKind;

/// Statistics for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1); 0.0 for a single value.
    pub std: f64,
    pub median: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
}

impl NumericStatistics {
    /// Calculate the interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Width of the observed range.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Descriptive summary of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred data category.
    pub kind: ColumnKind,
    /// Number of non-null values.
    pub non_null_count: usize,
    /// Number of null/missing values.
    pub missing_count: usize,
    /// Share of missing values (0.0 for an empty table).
    pub missing_share: f64,
    /// Number of distinct non-null values.
    pub distinct_count: usize,
    /// First few distinct values, for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub example_values: Vec<String>,
    /// Numeric statistics (numeric columns only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStatistics>,
}

impl ColumnSummary {
    /// Returns true if the column was classified as numeric.
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// Returns true if the column was classified as categorical.
    pub fn is_categorical(&self) -> bool {
        self.kind.is_categorical()
    }

    /// Ratio of distinct values to non-null values.
    pub fn uniqueness_ratio(&self) -> f64 {
        if self.non_null_count == 0 {
            0.0
        } else {
            self.distinct_count as f64 / self.non_null_count as f64
        }
    }
}
