//! Runs the detectors and folds their results into one score.

use tracing::debug;

use crate::input::DataTable;
use crate::schema::{DatasetSummary, MissingTable};

use super::config::{PenaltyWeights, QualityConfig};
use super::detectors::{
    ConstantColumnDetector, Detection, Detector, DetectorKind, HighCardinalityDetector,
    ManyZerosDetector, SuspiciousIdDetector,
};
use super::flags::{Penalty, QualityFlags};

/// Source name used for the missingness penalty.
const MISSINGNESS_SOURCE: &str = "missingness";

/// Quality-flag engine holding the registered detectors.
pub struct QualityFlagEngine {
    config: QualityConfig,
    detectors: Vec<Box<dyn Detector>>,
}

impl QualityFlagEngine {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(QualityConfig::default())
    }

    /// Create an engine with custom thresholds.
    pub fn with_config(config: QualityConfig) -> Self {
        let detectors: Vec<Box<dyn Detector>> = vec![
            Box::new(ConstantColumnDetector),
            Box::new(HighCardinalityDetector::new(config.high_cardinality_threshold)),
            Box::new(SuspiciousIdDetector::new(config.near_unique_ratio)),
            Box::new(ManyZerosDetector::new(config.zero_share_threshold)),
        ];

        Self { config, detectors }
    }

    /// The configuration in use.
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Run every detector independently.
    pub fn detect(&self, summary: &DatasetSummary, table: &DataTable) -> Vec<Detection> {
        self.detectors
            .iter()
            .map(|detector| {
                let detection = detector.detect(summary, table);
                debug!(
                    detector = %detection.kind,
                    affected = detection.count(),
                    "Detector finished"
                );
                detection
            })
            .collect()
    }

    /// Compute the quality flags for a summarized table.
    pub fn evaluate(
        &self,
        summary: &DatasetSummary,
        missing: &MissingTable,
        table: &DataTable,
    ) -> QualityFlags {
        let detections = self.detect(summary, table);
        let (quality_score, penalties) = score(&detections, missing, &self.config.penalties);

        let take = |kind: DetectorKind| {
            detections
                .iter()
                .find(|d| d.kind == kind)
                .cloned()
                .unwrap_or_else(|| Detection::none(kind))
        };
        let constant = take(DetectorKind::ConstantColumns);
        let high_cardinality = take(DetectorKind::HighCardinality);
        let suspicious_id = take(DetectorKind::SuspiciousIdDuplicates);
        let many_zeros = take(DetectorKind::ManyZeroValues);

        let max_missing_share = missing.max_share();

        debug!(
            score = quality_score,
            penalties = penalties.len(),
            "Quality score computed"
        );

        QualityFlags {
            too_few_rows: summary.n_rows < self.config.min_rows,
            too_many_columns: summary.n_cols > self.config.max_columns,
            max_missing_share,
            avg_missing_share: missing.average_share(),
            too_many_missing: max_missing_share > self.config.too_many_missing_share,

            has_constant_columns: constant.fired(),
            constant_columns_count: constant.count(),
            constant_columns: constant.findings,

            has_high_cardinality_categoricals: high_cardinality.fired(),
            high_cardinality_count: high_cardinality.count(),
            high_cardinality_columns: high_cardinality.findings,

            has_suspicious_id_duplicates: suspicious_id.fired(),
            suspicious_id_count: suspicious_id.count(),
            suspicious_id_columns: suspicious_id.findings,

            has_many_zero_values: many_zeros.fired(),
            many_zero_values_count: many_zeros.count(),
            many_zero_columns: many_zeros.findings,

            penalties,
            quality_score,
        }
    }
}

impl Default for QualityFlagEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-column penalty for a detector.
fn weight_for(kind: DetectorKind, weights: &PenaltyWeights) -> f64 {
    match kind {
        DetectorKind::ConstantColumns => weights.constant_column,
        DetectorKind::HighCardinality => weights.high_cardinality,
        DetectorKind::SuspiciousIdDuplicates => weights.suspicious_id,
        DetectorKind::ManyZeroValues => weights.many_zeros,
    }
}

/// Fold detections and missingness into a score in [0, 1].
///
/// Each firing detector subtracts its per-column weight times the number of
/// affected columns; missingness subtracts its weight times the average
/// missing share. The sum is clamped once at the end.
pub fn score(
    detections: &[Detection],
    missing: &MissingTable,
    weights: &PenaltyWeights,
) -> (f64, Vec<Penalty>) {
    let mut penalties: Vec<Penalty> = detections
        .iter()
        .filter(|d| d.fired())
        .map(|d| Penalty {
            source: d.kind.flag_name().to_string(),
            amount: weight_for(d.kind, weights) * d.count() as f64,
        })
        .collect();

    let average_missing = missing.average_share();
    if average_missing > 0.0 {
        penalties.push(Penalty {
            source: MISSINGNESS_SOURCE.to_string(),
            amount: weights.missingness * average_missing,
        });
    }

    let total: f64 = penalties.iter().map(|p| p.amount).sum();
    ((1.0 - total).clamp(0.0, 1.0), penalties)
}

/// Compute quality flags with the default configuration.
pub fn compute_quality_flags(
    summary: &DatasetSummary,
    missing: &MissingTable,
    table: &DataTable,
) -> QualityFlags {
    QualityFlagEngine::new().evaluate(summary, missing, table)
}
