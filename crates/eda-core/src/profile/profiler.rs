//! Per-column descriptive statistics.

use indexmap::IndexSet;

use crate::input::DataTable;
use crate::schema::{ColumnKind, ColumnSummary, NumericStatistics};

/// Number of example values kept per column.
pub const DEFAULT_EXAMPLE_COUNT: usize = 3;

// =============================================================================
// RUNNING STATISTICS
// =============================================================================
// Welford's online algorithm for mean and variance in a single pass.
// Values are divided by a power-of-two scale first so the deltas stay finite
// near the edge of the f64 range; the division is exact.

/// Magnitude above which values are rescaled before accumulating.
const RESCALE_ABOVE: f64 = 1e150;

#[derive(Debug, Clone)]
struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
    scale: f64,
}

impl RunningStats {
    fn new(scale: f64) -> Self {
        Self {
            scale,
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;

        let scaled = value / self.scale;
        let delta = scaled - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = scaled - self.mean;
        self.m2 += delta * delta2;

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn mean(&self) -> f64 {
        self.mean * self.scale
    }

    /// Sample standard deviation; zero below two observations.
    fn std(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.m2 / (self.count - 1) as f64).sqrt() * self.scale
        }
    }
}

/// Power of two at or below the largest magnitude, or 1 for ordinary data.
fn rescale_factor(values: &[f64]) -> f64 {
    let max_abs = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max_abs > RESCALE_ABOVE {
        2f64.powi(max_abs.log2().floor() as i32)
    } else {
        1.0
    }
}

/// Linear-interpolated quantile of sorted values, `q` in [0, 1].
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let fraction = pos - lower as f64;
            let (lo, hi) = (sorted[lower], sorted[upper]);
            if fraction == 0.0 || lo == hi {
                lo
            } else {
                // Weighted form; `hi - lo` can overflow for opposite-signed extremes
                lo * (1.0 - fraction) + hi * fraction
            }
        }
    }
}

/// Compute numeric statistics; `None` when there are no values.
pub fn numeric_statistics(values: &[f64]) -> Option<NumericStatistics> {
    if values.is_empty() {
        return None;
    }

    let mut stats = RunningStats::new(rescale_factor(values));
    for &value in values {
        stats.add(value);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(NumericStatistics {
        min: stats.min,
        max: stats.max,
        mean: stats.mean(),
        std: stats.std(),
        median: quantile(&sorted, 0.5),
        q1: quantile(&sorted, 0.25),
        q3: quantile(&sorted, 0.75),
    })
}

/// Classify a column from its non-null values.
pub fn classify<'a>(mut values: impl Iterator<Item = &'a str>) -> ColumnKind {
    let Some(first) = values.next() else {
        return ColumnKind::Other;
    };

    let all_numeric = std::iter::once(first)
        .chain(values)
        .all(|v| DataTable::parse_numeric(v).is_some());

    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Computes a [`ColumnSummary`] for a column of a [`DataTable`].
#[derive(Debug, Clone)]
pub struct ColumnProfiler {
    example_count: usize,
}

impl ColumnProfiler {
    /// Create a profiler with default settings.
    pub fn new() -> Self {
        Self {
            example_count: DEFAULT_EXAMPLE_COUNT,
        }
    }

    /// Keep up to `count` example values per column.
    pub fn with_example_count(mut self, count: usize) -> Self {
        self.example_count = count;
        self
    }

    /// Profile the column at `index`.
    pub fn profile_column(&self, table: &DataTable, index: usize) -> ColumnSummary {
        let name = table.headers.get(index).cloned().unwrap_or_default();
        let n_rows = table.row_count();

        let non_null: Vec<&str> = table.non_null_values(index).collect();
        let missing_count = n_rows - non_null.len();
        let missing_share = if n_rows == 0 {
            0.0
        } else {
            missing_count as f64 / n_rows as f64
        };

        let kind = classify(non_null.iter().copied());
        let numeric = kind.is_numeric();

        // Distinct values keep first-seen order for the examples
        let mut distinct: IndexSet<String> = IndexSet::new();
        let mut examples = Vec::new();
        for value in &non_null {
            if distinct.insert(DataTable::value_key(value, numeric)) && examples.len() < self.example_count {
                examples.push(value.to_string());
            }
        }

        let numeric_stats = if numeric {
            let values: Vec<f64> = non_null
                .iter()
                .filter_map(|v| DataTable::parse_numeric(v))
                .collect();
            numeric_statistics(&values)
        } else {
            None
        };

        ColumnSummary {
            name,
            position: index,
            kind,
            non_null_count: non_null.len(),
            missing_count,
            missing_share,
            distinct_count: distinct.len(),
            example_values: examples,
            numeric: numeric_stats,
        }
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_column(values: Vec<Option<&str>>) -> DataTable {
        DataTable::from_columns(vec![("col", values)])
    }

    #[test]
    fn test_numeric_column_with_missing() {
        let table = single_column(vec![Some("10"), Some("20"), Some("30"), None]);
        let summary = ColumnProfiler::new().profile_column(&table, 0);

        assert_eq!(summary.kind, ColumnKind::Numeric);
        assert_eq!(summary.missing_count, 1);
        assert_eq!(summary.non_null_count, 3);
        assert!((summary.missing_share - 0.25).abs() < 1e-12);
        assert_eq!(summary.distinct_count, 3);

        let stats = summary.numeric.unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert!((stats.mean - 20.0).abs() < 1e-12);
        assert!((stats.std - 10.0).abs() < 1e-12);
        assert_eq!(stats.median, 20.0);
    }

    #[test]
    fn test_mixed_values_are_categorical() {
        let table = single_column(vec![Some("1"), Some("two"), Some("3")]);
        let summary = ColumnProfiler::new().profile_column(&table, 0);

        assert_eq!(summary.kind, ColumnKind::Categorical);
        assert!(summary.numeric.is_none());
    }

    #[test]
    fn test_all_null_column_is_other() {
        let table = single_column(vec![None, None]);
        let summary = ColumnProfiler::new().profile_column(&table, 0);

        assert_eq!(summary.kind, ColumnKind::Other);
        assert_eq!(summary.distinct_count, 0);
        assert_eq!(summary.missing_share, 1.0);
    }

    #[test]
    fn test_numeric_distinct_compares_values() {
        let table = single_column(vec![Some("10"), Some("10.0"), Some("1e1"), Some("5")]);
        let summary = ColumnProfiler::new().profile_column(&table, 0);

        assert_eq!(summary.distinct_count, 2);
        assert_eq!(summary.example_values, vec!["10", "5"]);
    }

    #[test]
    fn test_quantile_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn test_extreme_values_stay_finite() {
        let stats = numeric_statistics(&[1e308, -1e308]).unwrap();
        assert_eq!(stats.min, -1e308);
        assert_eq!(stats.max, 1e308);
        assert_eq!(stats.mean, 0.0);
        assert!(stats.std.is_finite());
        assert!((stats.std / 1.4142135623730951e308 - 1.0).abs() < 1e-12);
        assert_eq!(stats.median, 0.0);
        assert!((stats.q1 / -5e307 - 1.0).abs() < 1e-12);
        assert!((stats.q3 / 5e307 - 1.0).abs() < 1e-12);

        let stats = numeric_statistics(&[f64::MAX, f64::MAX, f64::MAX]).unwrap();
        assert_eq!(stats.mean, f64::MAX);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.median, f64::MAX);
    }

    #[test]
    fn test_single_value_has_zero_std() {
        let stats = numeric_statistics(&[42.0]).unwrap();
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.range(), 0.0);
        assert!(numeric_statistics(&[]).is_none());
    }
}
