//! Named quality flags and the composite score.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::detectors::Finding;

/// A score deduction and what caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    /// Flag or signal responsible (e.g. `has_constant_columns`).
    pub source: String,
    /// Amount subtracted from the score before clamping.
    pub amount: f64,
}

/// Value of a single named flag, for generic display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Count(usize),
    Share(f64),
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Count(n) => write!(f, "{}", n),
            FlagValue::Share(x) => write!(f, "{:.3}", x),
        }
    }
}

/// Data-quality flags for one dataset.
///
/// Built by [`QualityFlagEngine`](super::QualityFlagEngine); never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityFlags {
    /// Fewer rows than the configured minimum (informational).
    pub too_few_rows: bool,
    /// More columns than the configured maximum (informational).
    pub too_many_columns: bool,
    /// Largest per-column missing share.
    pub max_missing_share: f64,
    /// Mean per-column missing share.
    pub avg_missing_share: f64,
    /// Some column is missing more than the configured share (informational).
    pub too_many_missing: bool,

    pub has_constant_columns: bool,
    pub constant_columns_count: usize,
    pub constant_columns: Vec<Finding>,

    pub has_high_cardinality_categoricals: bool,
    pub high_cardinality_count: usize,
    pub high_cardinality_columns: Vec<Finding>,

    pub has_suspicious_id_duplicates: bool,
    pub suspicious_id_count: usize,
    pub suspicious_id_columns: Vec<Finding>,

    pub has_many_zero_values: bool,
    pub many_zero_values_count: usize,
    pub many_zero_columns: Vec<Finding>,

    /// Deductions applied to reach the score.
    pub penalties: Vec<Penalty>,
    /// Composite score in [0, 1]; 1.0 means nothing was detected.
    pub quality_score: f64,
}

impl QualityFlags {
    /// All scalar flags as (name, value) pairs, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, FlagValue)> {
        vec![
            ("too_few_rows", FlagValue::Bool(self.too_few_rows)),
            ("too_many_columns", FlagValue::Bool(self.too_many_columns)),
            ("max_missing_share", FlagValue::Share(self.max_missing_share)),
            ("avg_missing_share", FlagValue::Share(self.avg_missing_share)),
            ("too_many_missing", FlagValue::Bool(self.too_many_missing)),
            ("has_constant_columns", FlagValue::Bool(self.has_constant_columns)),
            ("constant_columns_count", FlagValue::Count(self.constant_columns_count)),
            (
                "has_high_cardinality_categoricals",
                FlagValue::Bool(self.has_high_cardinality_categoricals),
            ),
            ("high_cardinality_count", FlagValue::Count(self.high_cardinality_count)),
            (
                "has_suspicious_id_duplicates",
                FlagValue::Bool(self.has_suspicious_id_duplicates),
            ),
            ("suspicious_id_count", FlagValue::Count(self.suspicious_id_count)),
            ("has_many_zero_values", FlagValue::Bool(self.has_many_zero_values)),
            ("many_zero_values_count", FlagValue::Count(self.many_zero_values_count)),
            ("quality_score", FlagValue::Share(self.quality_score)),
        ]
    }

    /// Look up a scalar flag by name.
    pub fn get(&self, name: &str) -> Option<FlagValue> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Returns true if any of the four detectors fired.
    pub fn any_detector_fired(&self) -> bool {
        self.has_constant_columns
            || self.has_high_cardinality_categoricals
            || self.has_suspicious_id_duplicates
            || self.has_many_zero_values
    }

    /// Every finding across detectors, tagged with its flag name.
    pub fn findings(&self) -> impl Iterator<Item = (&'static str, &Finding)> {
        self.constant_columns
            .iter()
            .map(|f| ("has_constant_columns", f))
            .chain(
                self.high_cardinality_columns
                    .iter()
                    .map(|f| ("has_high_cardinality_categoricals", f)),
            )
            .chain(
                self.suspicious_id_columns
                    .iter()
                    .map(|f| ("has_suspicious_id_duplicates", f)),
            )
            .chain(self.many_zero_columns.iter().map(|f| ("has_many_zero_values", f)))
    }
}
