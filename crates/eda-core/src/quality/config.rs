//! Thresholds and penalty weights for the quality engine.

/// A categorical column with more distinct values than this is high-cardinality.
pub const HIGH_CARDINALITY_THRESHOLD: usize = 50;

/// A numeric column whose zero share exceeds this has "many zeros".
pub const ZERO_SHARE_THRESHOLD: f64 = 0.5;

/// Distinct/non-null ratio at which a column counts as near-unique.
pub const NEAR_UNIQUE_RATIO: f64 = 0.95;

/// Fewer rows than this sets the informational `too_few_rows` flag.
pub const MIN_ROWS: usize = 100;

/// More columns than this sets the informational `too_many_columns` flag.
pub const MAX_COLUMNS: usize = 100;

/// A column missing more than this share sets `too_many_missing`.
pub const TOO_MANY_MISSING_SHARE: f64 = 0.5;

/// Score penalty per constant column.
pub const CONSTANT_COLUMN_PENALTY: f64 = 0.15;

/// Score penalty per high-cardinality categorical column.
pub const HIGH_CARDINALITY_PENALTY: f64 = 0.10;

/// Score penalty per identifier column holding duplicates.
pub const SUSPICIOUS_ID_PENALTY: f64 = 0.20;

/// Score penalty per column dominated by zeros.
pub const MANY_ZEROS_PENALTY: f64 = 0.10;

/// Weight applied to the average missing share.
///
/// Must stay at most twice [`CONSTANT_COLUMN_PENALTY`]: adding a complete
/// column lowers the average missing share by at most half this weight, and
/// the constant-column penalty has to outweigh that.
pub const MISSINGNESS_WEIGHT: f64 = 0.30;

/// Configuration for [`QualityFlagEngine`](super::QualityFlagEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct QualityConfig {
    /// Distinct-value count above which a categorical column is flagged.
    pub high_cardinality_threshold: usize,
    /// Zero share above which a numeric column is flagged.
    pub zero_share_threshold: f64,
    /// Uniqueness ratio that makes a column an identifier candidate.
    pub near_unique_ratio: f64,
    /// Row count below which `too_few_rows` is set.
    pub min_rows: usize,
    /// Column count above which `too_many_columns` is set.
    pub max_columns: usize,
    /// Missing share above which `too_many_missing` is set.
    pub too_many_missing_share: f64,
    /// Penalty weights.
    pub penalties: PenaltyWeights,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            high_cardinality_threshold: HIGH_CARDINALITY_THRESHOLD,
            zero_share_threshold: ZERO_SHARE_THRESHOLD,
            near_unique_ratio: NEAR_UNIQUE_RATIO,
            min_rows: MIN_ROWS,
            max_columns: MAX_COLUMNS,
            too_many_missing_share: TOO_MANY_MISSING_SHARE,
            penalties: PenaltyWeights::default(),
        }
    }
}

/// Per-column score penalties for each detector, plus the missingness weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyWeights {
    pub constant_column: f64,
    pub high_cardinality: f64,
    pub suspicious_id: f64,
    pub many_zeros: f64,
    pub missingness: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            constant_column: CONSTANT_COLUMN_PENALTY,
            high_cardinality: HIGH_CARDINALITY_PENALTY,
            suspicious_id: SUSPICIOUS_ID_PENALTY,
            many_zeros: MANY_ZEROS_PENALTY,
            missingness: MISSINGNESS_WEIGHT,
        }
    }
}
