//! Most frequent values of categorical columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::profile::classify;

/// Default number of categorical columns to profile.
pub const DEFAULT_MAX_COLUMNS: usize = 5;

/// Default number of values kept per column.
pub const DEFAULT_TOP_K: usize = 5;

/// One value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Share of the column's non-null values.
    pub share: f64,
}

/// Top values per categorical column, in table order.
pub type TopCategoriesTable = IndexMap<String, Vec<CategoryCount>>;

/// Counts value frequencies for categorical columns.
#[derive(Debug, Clone)]
pub struct CategoryProfiler {
    max_columns: usize,
    top_k: usize,
}

impl CategoryProfiler {
    pub fn new(max_columns: usize, top_k: usize) -> Self {
        Self { max_columns, top_k }
    }

    /// Profile up to `max_columns` categorical columns.
    pub fn profile(&self, table: &DataTable) -> TopCategoriesTable {
        (0..table.column_count())
            .filter(|&idx| classify(table.non_null_values(idx)).is_categorical())
            .take(self.max_columns)
            .map(|idx| (table.headers[idx].clone(), self.top_values(table, idx)))
            .collect()
    }

    /// Most frequent values of one column; ties keep first-seen order.
    pub fn top_values(&self, table: &DataTable, index: usize) -> Vec<CategoryCount> {
        let counts = table.value_counts(index);
        let total: usize = counts.values().sum();

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        // Stable sort keeps insertion order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.top_k);

        ranked
            .into_iter()
            .map(|(value, count)| CategoryCount {
                value,
                count,
                share: if total == 0 { 0.0 } else { count as f64 / total as f64 },
            })
            .collect()
    }
}

impl Default for CategoryProfiler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COLUMNS, DEFAULT_TOP_K)
    }
}

/// Top `top_k` values for up to `max_columns` categorical columns.
pub fn top_categories(table: &DataTable, max_columns: usize, top_k: usize) -> TopCategoriesTable {
    CategoryProfiler::new(max_columns, top_k).profile(table)
}
