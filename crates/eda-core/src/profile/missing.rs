//! Missingness table, computed directly from the raw cells.

use indexmap::IndexMap;

use crate::input::DataTable;
use crate::schema::{MissingEntry, MissingTable};

/// Count missing cells per column.
///
/// Computed independently of the column profiler; the two agree on every
/// column.
pub fn missing_table(table: &DataTable) -> MissingTable {
    let n_rows = table.row_count();

    let entries: IndexMap<String, MissingEntry> = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let missing_count = table.null_count(idx);
            let missing_share = if n_rows == 0 {
                0.0
            } else {
                missing_count as f64 / n_rows as f64
            };
            (
                name.clone(),
                MissingEntry {
                    missing_count,
                    missing_share,
                },
            )
        })
        .collect();

    MissingTable::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::summarize_dataset;

    #[test]
    fn test_missing_table_counts() {
        let table = DataTable::from_columns(vec![
            ("age", vec![Some("10"), Some("20"), Some("30"), None]),
            ("city", vec![Some("A"), Some("NA"), Some("A"), None]),
        ]);
        let missing = missing_table(&table);

        assert_eq!(missing["age"].missing_count, 1);
        assert_eq!(missing["city"].missing_count, 2);
        assert_eq!(missing["city"].missing_share, 0.5);
        assert_eq!(missing.max_share(), 0.5);
        assert!((missing.average_share() - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_missing_table_keeps_column_order() {
        let table = DataTable::from_columns(vec![
            ("z", vec![Some("1")]),
            ("a", vec![None]),
            ("m", vec![Some("x")]),
        ]);
        let missing = missing_table(&table);
        let names: Vec<&str> = missing.iter().map(|(n, _)| n).collect();

        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_missing_table_agrees_with_summary() {
        let table = DataTable::from_columns(vec![
            ("a", vec![None, Some("1"), Some(" "), Some("null")]),
            ("b", vec![Some("x"), Some("y"), Some("z"), Some("w")]),
        ]);
        let missing = missing_table(&table);
        let summary = summarize_dataset(&table);

        for column in &summary.columns {
            let entry = missing.get(&column.name).unwrap();
            assert_eq!(entry.missing_count, column.missing_count);
            assert_eq!(entry.missing_share, column.missing_share);
        }
    }

    #[test]
    fn test_missing_table_empty_rows() {
        let table = DataTable::new(vec!["a".into()], Vec::new(), b',');
        let missing = missing_table(&table);

        assert_eq!(missing["a"].missing_count, 0);
        assert_eq!(missing["a"].missing_share, 0.0);
        assert_eq!(missing.average_share(), 0.0);
    }
}
