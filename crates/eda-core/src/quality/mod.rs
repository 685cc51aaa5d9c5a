//! Data-quality heuristics and the composite quality score.
//!
//! Four independent [`Detector`]s inspect a summarized table. The
//! [`QualityFlagEngine`] runs them, turns their findings into named flags and
//! folds everything, together with the average missing share, into a single
//! score in `[0, 1]`.
//!
//! # Scoring
//!
//! | Signal | Penalty |
//! |--------|---------|
//! | constant column | 0.15 per column |
//! | high-cardinality categorical | 0.10 per column |
//! | identifier with duplicates | 0.20 per column |
//! | mostly-zero numeric column | 0.10 per column |
//! | missingness | 0.30 × average missing share |
//!
//! The total is subtracted from 1.0 and clamped to `[0, 1]`.

mod config;
mod detectors;
mod engine;
mod flags;

pub use config::{
    CONSTANT_COLUMN_PENALTY, HIGH_CARDINALITY_PENALTY, HIGH_CARDINALITY_THRESHOLD, MANY_ZEROS_PENALTY,
    MAX_COLUMNS, MIN_ROWS, MISSINGNESS_WEIGHT, NEAR_UNIQUE_RATIO, PenaltyWeights, QualityConfig,
    SUSPICIOUS_ID_PENALTY, TOO_MANY_MISSING_SHARE, ZERO_SHARE_THRESHOLD,
};
pub use detectors::{
    ConstantColumnDetector, Detection, Detector, DetectorKind, Finding, HighCardinalityDetector,
    ManyZerosDetector, SuspiciousIdDetector, is_identifier_name,
};
pub use engine::{QualityFlagEngine, compute_quality_flags, score};
pub use flags::{FlagValue, Penalty, QualityFlags};
