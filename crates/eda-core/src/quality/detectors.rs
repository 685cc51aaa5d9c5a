//! Independent data-quality detectors.
//!
//! Each detector looks at the dataset summary (and the raw table where the
//! summary is not enough) and reports the columns it considers affected.
//! Detectors never fail: degenerate input simply yields no findings.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::schema::{ColumnSummary, DatasetSummary};

use super::config::{HIGH_CARDINALITY_THRESHOLD, NEAR_UNIQUE_RATIO, ZERO_SHARE_THRESHOLD};

/// Column names that usually hold row identifiers: `id`, `user_id`,
/// `id-code`, `userId`, `order ID`, `uuid`, ...
static IDENTIFIER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:(?:^|[_\-\s.])(?:id|uuid|guid)(?:$|[_\-\s.]))|[a-z0-9](?:Id|ID)$")
        .expect("identifier pattern is valid")
});

/// Check whether a column name looks like an identifier.
pub fn is_identifier_name(name: &str) -> bool {
    IDENTIFIER_NAME.is_match(name.trim())
}

/// Which heuristic produced a [`Detection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// Columns with at most one distinct non-null value.
    ConstantColumns,
    /// Categorical columns with too many distinct values.
    HighCardinality,
    /// Identifier-like columns that contain repeated values.
    SuspiciousIdDuplicates,
    /// Numeric columns dominated by exact zeros.
    ManyZeroValues,
}

impl DetectorKind {
    /// Name of the boolean presence flag this detector drives.
    pub fn flag_name(&self) -> &'static str {
        match self {
            DetectorKind::ConstantColumns => "has_constant_columns",
            DetectorKind::HighCardinality => "has_high_cardinality_categoricals",
            DetectorKind::SuspiciousIdDuplicates => "has_suspicious_id_duplicates",
            DetectorKind::ManyZeroValues => "has_many_zero_values",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DetectorKind::ConstantColumns => "Constant columns",
            DetectorKind::HighCardinality => "High-cardinality categoricals",
            DetectorKind::SuspiciousIdDuplicates => "Duplicate identifiers",
            DetectorKind::ManyZeroValues => "Many zero values",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One affected column and why it was flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub column: String,
    pub detail: String,
}

impl Finding {
    fn new(column: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            detail: detail.into(),
        }
    }
}

/// Result of running one detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: DetectorKind,
    pub findings: Vec<Finding>,
}

impl Detection {
    /// A detection with no findings.
    pub fn none(kind: DetectorKind) -> Self {
        Self {
            kind,
            findings: Vec::new(),
        }
    }

    /// Returns true if at least one column was flagged.
    pub fn fired(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Number of flagged columns.
    pub fn count(&self) -> usize {
        self.findings.len()
    }

    /// Names of the flagged columns, in table order.
    pub fn columns(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.column.clone()).collect()
    }
}

/// A single data-quality heuristic.
pub trait Detector {
    /// Which heuristic this is.
    fn kind(&self) -> DetectorKind;

    /// Run the heuristic over a summarized table.
    fn detect(&self, summary: &DatasetSummary, table: &DataTable) -> Detection;
}

/// Flags columns holding at most one distinct non-null value.
///
/// All-null columns count as constant. An empty table has none.
pub struct ConstantColumnDetector;

impl Detector for ConstantColumnDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::ConstantColumns
    }

    fn detect(&self, summary: &DatasetSummary, _table: &DataTable) -> Detection {
        if summary.n_rows == 0 {
            return Detection::none(self.kind());
        }

        let findings = summary
            .columns
            .iter()
            .filter(|c| c.distinct_count <= 1)
            .map(|c| {
                let detail = match c.example_values.first() {
                    Some(value) => format!("single value '{}'", value),
                    None => "no non-null values".to_string(),
                };
                Finding::new(&c.name, detail)
            })
            .collect();

        Detection {
            kind: self.kind(),
            findings,
        }
    }
}

/// Flags categorical columns with more distinct values than a threshold.
pub struct HighCardinalityDetector {
    threshold: usize,
}

impl HighCardinalityDetector {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for HighCardinalityDetector {
    fn default() -> Self {
        Self::new(HIGH_CARDINALITY_THRESHOLD)
    }
}

impl Detector for HighCardinalityDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::HighCardinality
    }

    fn detect(&self, summary: &DatasetSummary, _table: &DataTable) -> Detection {
        let findings = summary
            .categorical_columns()
            .filter(|c| c.distinct_count > self.threshold)
            .map(|c| {
                Finding::new(
                    &c.name,
                    format!("{} distinct values (limit {})", c.distinct_count, self.threshold),
                )
            })
            .collect();

        Detection {
            kind: self.kind(),
            findings,
        }
    }
}

/// Flags identifier-like columns that contain duplicate values.
///
/// Candidates are columns with an identifier-style name or a near-unique
/// value distribution. Duplicates are counted on the raw cells.
pub struct SuspiciousIdDetector {
    near_unique_ratio: f64,
}

impl SuspiciousIdDetector {
    pub fn new(near_unique_ratio: f64) -> Self {
        Self { near_unique_ratio }
    }

    fn is_candidate(&self, column: &ColumnSummary) -> bool {
        if column.non_null_count < 2 {
            return false;
        }
        is_identifier_name(&column.name) || column.uniqueness_ratio() >= self.near_unique_ratio
    }

    /// Number of cells repeating an earlier value.
    fn duplicate_count(table: &DataTable, column: &ColumnSummary) -> usize {
        let mut seen = HashSet::new();
        table
            .non_null_values(column.position)
            .filter(|v| !seen.insert(DataTable::value_key(v, column.is_numeric())))
            .count()
    }
}

impl Default for SuspiciousIdDetector {
    fn default() -> Self {
        Self::new(NEAR_UNIQUE_RATIO)
    }
}

impl Detector for SuspiciousIdDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::SuspiciousIdDuplicates
    }

    fn detect(&self, summary: &DatasetSummary, table: &DataTable) -> Detection {
        let findings = summary
            .columns
            .iter()
            .filter(|c| self.is_candidate(c))
            .filter_map(|c| {
                let duplicates = Self::duplicate_count(table, c);
                (duplicates > 0).then(|| {
                    Finding::new(&c.name, format!("{} repeated identifier value(s)", duplicates))
                })
            })
            .collect();

        Detection {
            kind: self.kind(),
            findings,
        }
    }
}

/// Flags numeric columns where exact zeros exceed a share of the values.
pub struct ManyZerosDetector {
    threshold: f64,
}

impl ManyZerosDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Share of exact zeros among the non-null values of a column.
    fn zero_share(table: &DataTable, column: &ColumnSummary) -> f64 {
        if column.non_null_count == 0 {
            return 0.0;
        }
        let zeros = table
            .non_null_values(column.position)
            .filter(|v| DataTable::parse_numeric(v) == Some(0.0))
            .count();
        zeros as f64 / column.non_null_count as f64
    }
}

impl Default for ManyZerosDetector {
    fn default() -> Self {
        Self::new(ZERO_SHARE_THRESHOLD)
    }
}

impl Detector for ManyZerosDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::ManyZeroValues
    }

    fn detect(&self, summary: &DatasetSummary, table: &DataTable) -> Detection {
        let findings = summary
            .numeric_columns()
            .filter_map(|c| {
                let share = Self::zero_share(table, c);
                (share > self.threshold)
                    .then(|| Finding::new(&c.name, format!("{:.1}% zeros", share * 100.0)))
            })
            .collect();

        Detection {
            kind: self.kind(),
            findings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::summarize_dataset;

    fn run(detector: &dyn Detector, table: &DataTable) -> Detection {
        detector.detect(&summarize_dataset(table), table)
    }

    #[test]
    fn test_identifier_names() {
        for name in ["id", "ID", "user_id", "order-id", "id_user", "userId", "customerID", "order id", "uuid"] {
            assert!(is_identifier_name(name), "{name} should look like an identifier");
        }
        for name in ["width", "paid", "valid", "idea", "Android", "name"] {
            assert!(!is_identifier_name(name), "{name} should not look like an identifier");
        }
    }

    #[test]
    fn test_constant_column_detected() {
        let table = DataTable::from_columns(vec![
            ("id", vec![Some("1"), Some("2"), Some("3"), Some("4")]),
            ("constant_col", vec![Some("5"), Some("5"), Some("5"), Some("5")]),
            ("normal_col", vec![Some("1"), Some("2"), Some("3"), Some("4")]),
        ]);
        let detection = run(&ConstantColumnDetector, &table);

        assert!(detection.fired());
        assert_eq!(detection.columns(), vec!["constant_col"]);
    }

    #[test]
    fn test_constant_ignores_empty_table() {
        let table = DataTable::new(vec!["a".into()], Vec::new(), b',');
        assert!(!run(&ConstantColumnDetector, &table).fired());
    }

    #[test]
    fn test_all_null_column_is_constant() {
        let table = DataTable::from_columns(vec![("empty", vec![None, None, None])]);
        let detection = run(&ConstantColumnDetector, &table);

        assert_eq!(detection.count(), 1);
        assert_eq!(detection.findings[0].detail, "no non-null values");
    }

    #[test]
    fn test_high_cardinality_threshold_is_exclusive() {
        let fifty: Vec<String> = (0..50).map(|i| format!("cat_{i}")).collect();
        let table = DataTable::from_columns(vec![(
            "category",
            fifty.iter().map(|s| Some(s.as_str())).collect(),
        )]);
        assert!(!run(&HighCardinalityDetector::default(), &table).fired());

        let sixty: Vec<String> = (0..60).map(|i| format!("cat_{i}")).collect();
        let table = DataTable::from_columns(vec![(
            "category",
            sixty.iter().map(|s| Some(s.as_str())).collect(),
        )]);
        assert_eq!(run(&HighCardinalityDetector::default(), &table).count(), 1);
    }

    #[test]
    fn test_high_cardinality_skips_numeric_columns() {
        let values: Vec<String> = (0..80).map(|i| i.to_string()).collect();
        let table = DataTable::from_columns(vec![(
            "value",
            values.iter().map(|s| Some(s.as_str())).collect(),
        )]);
        assert!(!run(&HighCardinalityDetector::default(), &table).fired());
    }

    #[test]
    fn test_duplicate_identifier_by_name() {
        let table = DataTable::from_columns(vec![
            ("user_id", vec![Some("1"), Some("2"), Some("3"), Some("1")]),
            ("name", vec![Some("A"), Some("B"), Some("C"), Some("D")]),
        ]);
        let detection = run(&SuspiciousIdDetector::default(), &table);

        assert_eq!(detection.columns(), vec!["user_id"]);
        assert_eq!(detection.findings[0].detail, "1 repeated identifier value(s)");
    }

    #[test]
    fn test_duplicate_identifier_by_near_uniqueness() {
        let mut values: Vec<String> = (0..40).map(|i| format!("K{i:03}")).collect();
        values.push("K007".to_string());
        let table = DataTable::from_columns(vec![(
            "key",
            values.iter().map(|s| Some(s.as_str())).collect(),
        )]);

        assert!(run(&SuspiciousIdDetector::default(), &table).fired());
    }

    #[test]
    fn test_identifier_numeric_values_compare_by_value() {
        let table = DataTable::from_columns(vec![("id", vec![Some("1"), Some("1.0"), Some("2")])]);
        assert!(run(&SuspiciousIdDetector::default(), &table).fired());
    }

    #[test]
    fn test_unique_identifier_not_flagged() {
        let table = DataTable::from_columns(vec![("id", vec![Some("1"), Some("2"), None, Some("3")])]);
        assert!(!run(&SuspiciousIdDetector::default(), &table).fired());
    }

    #[test]
    fn test_single_row_identifier_not_flagged() {
        let table = DataTable::from_columns(vec![("id", vec![Some("1")])]);
        assert!(!run(&SuspiciousIdDetector::default(), &table).fired());
    }

    #[test]
    fn test_many_zero_values() {
        let table = DataTable::from_columns(vec![
            ("col1", vec![Some("0"), Some("0"), Some("0"), Some("10")]),
            ("col2", vec![Some("1"), Some("2"), Some("3"), Some("4")]),
        ]);
        let detection = run(&ManyZerosDetector::default(), &table);

        assert_eq!(detection.columns(), vec!["col1"]);
        assert_eq!(detection.findings[0].detail, "75.0% zeros");
    }

    #[test]
    fn test_half_zeros_not_flagged() {
        let table = DataTable::from_columns(vec![(
            "flag",
            vec![Some("0"), Some("1"), Some("0.0"), Some("1")],
        )]);
        assert!(!run(&ManyZerosDetector::default(), &table).fired());
    }

    #[test]
    fn test_zero_share_ignores_missing() {
        let table = DataTable::from_columns(vec![(
            "x",
            vec![Some("0"), Some("-0"), None, None, Some("3")],
        )]);
        assert!(run(&ManyZerosDetector::default(), &table).fired());
    }
}
