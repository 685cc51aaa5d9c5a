//! Flattening analysis results into printable tables.

use crate::analysis::{CategoryCount, CorrelationMatrix};
use crate::quality::QualityFlags;
use crate::schema::{DatasetSummary, MissingTable};

use super::table::{PrintTable, format_number};

/// Columns produced by [`flatten_summary_for_print`].
pub const SUMMARY_COLUMNS: [&str; 11] = [
    "name",
    "kind",
    "non_null",
    "missing",
    "missing_share",
    "unique",
    "is_numeric",
    "min",
    "max",
    "mean",
    "std",
];

/// One row per column with its main statistics, in table order.
pub fn flatten_summary_for_print(summary: &DatasetSummary) -> PrintTable {
    let mut table = PrintTable::new(SUMMARY_COLUMNS);

    for column in &summary.columns {
        let stat = |f: fn(&crate::schema::NumericStatistics) -> f64| {
            column.numeric.as_ref().map(|s| format_number(f(s))).unwrap_or_default()
        };

        table.push_row(vec![
            column.name.clone(),
            column.kind.to_string(),
            column.non_null_count.to_string(),
            column.missing_count.to_string(),
            format!("{:.3}", column.missing_share),
            column.distinct_count.to_string(),
            column.is_numeric().to_string(),
            stat(|s| s.min),
            stat(|s| s.max),
            stat(|s| s.mean),
            stat(|s| s.std),
        ]);
    }

    table
}

/// Missing count and share per column.
pub fn flatten_missing_for_print(missing: &MissingTable) -> PrintTable {
    let mut table = PrintTable::new(["name", "missing_count", "missing_share"]);
    for (name, entry) in missing.iter() {
        table.push_row(vec![
            name.to_string(),
            entry.missing_count.to_string(),
            format!("{:.3}", entry.missing_share),
        ]);
    }
    table
}

/// Square correlation table; undefined entries are blank.
pub fn flatten_correlation_for_print(matrix: &CorrelationMatrix) -> PrintTable {
    let mut table = PrintTable::new(
        std::iter::once(String::new()).chain(matrix.columns.iter().cloned()),
    );
    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        let mut cells = vec![name.clone()];
        cells.extend(
            row.iter()
                .map(|r| r.map(|v| format!("{:.3}", v)).unwrap_or_default()),
        );
        table.push_row(cells);
    }
    table
}

/// Value, count and share of one column's top categories.
pub fn flatten_categories_for_print(values: &[CategoryCount]) -> PrintTable {
    let mut table = PrintTable::new(["value", "count", "share"]);
    for entry in values {
        table.push_row(vec![
            entry.value.clone(),
            entry.count.to_string(),
            format!("{:.3}", entry.share),
        ]);
    }
    table
}

/// Flag name and value, one row per scalar flag.
pub fn flatten_flags_for_print(flags: &QualityFlags) -> PrintTable {
    let mut table = PrintTable::new(["flag", "value"]);
    for (name, value) in flags.entries() {
        table.push_row(vec![name.to_string(), value.to_string()]);
    }
    table
}
