//! Pairwise Pearson correlation between numeric columns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::DataTable;
use crate::profile::classify;

/// Symmetric correlation matrix over numeric columns.
///
/// Entries are `None` where the correlation is undefined (too few paired
/// rows, or a column without variance over the paired rows).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in table order.
    pub columns: Vec<String>,
    /// `values[i][j]` is the correlation of `columns[i]` and `columns[j]`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Returns true if fewer than two numeric columns were found.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Correlation between two named columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    /// Off-diagonal pairs sorted by descending absolute correlation.
    pub fn strongest_pairs(&self, limit: usize) -> Vec<(&str, &str, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.columns.len() {
            for j in (i + 1)..self.columns.len() {
                if let Some(r) = self.values[i][j] {
                    pairs.push((self.columns[i].as_str(), self.columns[j].as_str(), r));
                }
            }
        }
        pairs.sort_by(|a, b| b.2.abs().total_cmp(&a.2.abs()));
        pairs.truncate(limit);
        pairs
    }
}

/// Computes correlation matrices.
#[derive(Debug, Clone)]
pub struct CorrelationAnalyzer {
    /// Minimum number of rows where both values are present.
    min_pairs: usize,
}

impl CorrelationAnalyzer {
    /// Create an analyzer requiring two paired rows per coefficient.
    pub fn new() -> Self {
        Self { min_pairs: 2 }
    }

    /// Require at least `min_pairs` paired rows (never fewer than two).
    pub fn with_min_pairs(mut self, min_pairs: usize) -> Self {
        self.min_pairs = min_pairs.max(2);
        self
    }

    /// Correlate every pair of numeric columns.
    pub fn analyze(&self, table: &DataTable) -> CorrelationMatrix {
        let numeric: Vec<usize> = (0..table.column_count())
            .filter(|&idx| classify(table.non_null_values(idx)).is_numeric())
            .collect();

        if numeric.len() < 2 {
            debug!(numeric_columns = numeric.len(), "Too few numeric columns to correlate");
            return CorrelationMatrix::default();
        }

        let cells: Vec<Vec<Option<f64>>> = numeric.iter().map(|&idx| table.numeric_cells(idx)).collect();
        let n = cells.len();
        let mut values = vec![vec![None; n]; n];

        for i in 0..n {
            for j in i..n {
                let r = pearson(&cells[i], &cells[j], self.min_pairs).map(|r| if i == j { 1.0 } else { r });
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        CorrelationMatrix {
            columns: numeric.iter().map(|&idx| table.headers[idx].clone()).collect(),
            values,
        }
    }
}

impl Default for CorrelationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pearson coefficient over rows where both values are present.
fn pearson(x: &[Option<f64>], y: &[Option<f64>], min_pairs: usize) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    if pairs.len() < min_pairs {
        return None;
    }

    // The coefficient is scale-free; dividing by the largest magnitude keeps
    // the sums of squares finite for values near the f64 limit.
    let scale_x = pairs.iter().fold(0.0_f64, |acc, p| acc.max(p.0.abs()));
    let scale_y = pairs.iter().fold(0.0_f64, |acc, p| acc.max(p.1.abs()));
    if scale_x == 0.0 || scale_y == 0.0 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0 / scale_x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1 / scale_y).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(a, b) in &pairs {
        let dx = a / scale_x - mean_x;
        let dy = b / scale_y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = sxy / (sxx.sqrt() * syy.sqrt());
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Correlation matrix with default settings.
pub fn correlation_matrix(table: &DataTable) -> CorrelationMatrix {
    CorrelationAnalyzer::new().analyze(table)
}
