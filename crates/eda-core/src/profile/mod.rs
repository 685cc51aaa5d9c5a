//! Column profiling, dataset summaries and missingness.

mod missing;
mod profiler;
mod summary;

pub use missing::missing_table;
pub use profiler::{ColumnProfiler, DEFAULT_EXAMPLE_COUNT, classify, numeric_statistics};
pub use summary::{DatasetSummarizer, summarize_dataset};
