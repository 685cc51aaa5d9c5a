//! Correlation and categorical distributions.

mod categories;
mod correlation;

pub use categories::{
    CategoryCount, CategoryProfiler, DEFAULT_MAX_COLUMNS, DEFAULT_TOP_K, TopCategoriesTable,
    top_categories,
};
pub use correlation::{CorrelationAnalyzer, CorrelationMatrix, correlation_matrix};
