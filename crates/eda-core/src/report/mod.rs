//! Printable tables and Markdown reports.

mod flatten;
mod markdown;
mod table;

pub use flatten::{
    SUMMARY_COLUMNS, flatten_categories_for_print, flatten_correlation_for_print,
    flatten_flags_for_print, flatten_missing_for_print, flatten_summary_for_print,
};
pub use markdown::{ReportOptions, render_markdown};
pub use table::{PrintTable, format_number};
