//! Summary types describing a profiled table.

mod column;
mod table;
mod types;

pub use column::{ColumnSummary, NumericStatistics};
pub use table::{DatasetSummary, MissingEntry, MissingTable};
pub use types::ColumnKind;
