//! eda-core: exploratory summaries and data-quality scoring for tabular datasets.
//!
//! Given a delimited text file (or an in-memory [`DataTable`]), the crate
//! computes per-column statistics, a missing-value table, a numeric
//! correlation matrix and the most frequent categorical values, then folds a
//! set of heuristic detectors into a single quality score in `[0, 1]`.
//!
//! # Example
//!
//! ```no_run
//! use eda_core::{Eda, ReportOptions, render_markdown};
//!
//! let eda = Eda::new();
//! let report = eda.analyze("patients.csv").unwrap();
//!
//! println!("Columns: {}", report.summary.n_cols);
//! println!("Quality score: {:.2}", report.flags.quality_score);
//! println!("{}", render_markdown(&report, &ReportOptions::default()));
//! ```
//!
//! The individual steps are also available as free functions:
//! [`summarize_dataset`], [`missing_table`], [`compute_quality_flags`],
//! [`correlation_matrix`], [`top_categories`] and
//! [`flatten_summary_for_print`].

pub mod analysis;
pub mod error;
pub mod input;
pub mod profile;
pub mod quality;
pub mod report;
pub mod schema;

mod eda;

pub use crate::eda::{Eda, EdaConfig, EdaReport, recommendation};
pub use analysis::{CategoryCount, CorrelationMatrix, TopCategoriesTable, correlation_matrix, top_categories};
pub use error::{EdaError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata, parse_delimiter};
pub use profile::{missing_table, summarize_dataset};
pub use quality::{
    DetectorKind, Finding, FlagValue, Penalty, QualityConfig, QualityFlagEngine, QualityFlags,
    compute_quality_flags,
};
pub use report::{
    PrintTable, ReportOptions, flatten_categories_for_print, flatten_correlation_for_print,
    flatten_flags_for_print, flatten_missing_for_print, flatten_summary_for_print,
    render_markdown,
};
pub use schema::{
    ColumnKind, ColumnSummary, DatasetSummary, MissingEntry, MissingTable, NumericStatistics,
};
