//! Dataset-level summary built from column profiles.

use crate::input::DataTable;
use crate::schema::DatasetSummary;

use super::profiler::ColumnProfiler;

/// Aggregates [`ColumnProfiler`] output into a [`DatasetSummary`].
#[derive(Debug, Clone, Default)]
pub struct DatasetSummarizer {
    profiler: ColumnProfiler,
}

impl DatasetSummarizer {
    /// Create a summarizer with the default column profiler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer around a configured profiler.
    pub fn with_profiler(profiler: ColumnProfiler) -> Self {
        Self { profiler }
    }

    /// Summarize every column of the table, in order.
    pub fn summarize(&self, table: &DataTable) -> DatasetSummary {
        let columns = (0..table.column_count())
            .map(|idx| self.profiler.profile_column(table, idx))
            .collect();

        DatasetSummary {
            n_rows: table.row_count(),
            n_cols: table.column_count(),
            columns,
        }
    }
}

/// Summarize a dataset with default settings.
pub fn summarize_dataset(table: &DataTable) -> DatasetSummary {
    DatasetSummarizer::new().summarize(table)
}
