//! Main EDA struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{
    CategoryProfiler, CorrelationAnalyzer, CorrelationMatrix, DEFAULT_MAX_COLUMNS, DEFAULT_TOP_K,
    TopCategoriesTable,
};
use crate::error::{EdaError, Result};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::profile::{DatasetSummarizer, missing_table};
use crate::quality::{QualityConfig, QualityFlagEngine, QualityFlags};
use crate::schema::{DatasetSummary, MissingTable};

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct EdaConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Quality thresholds and penalty weights.
    pub quality: QualityConfig,
    /// How many categorical columns to profile.
    pub max_category_columns: usize,
    /// How many values to keep per categorical column.
    pub top_k_categories: usize,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            quality: QualityConfig::default(),
            max_category_columns: DEFAULT_MAX_COLUMNS,
            top_k_categories: DEFAULT_TOP_K,
        }
    }
}

impl EdaConfig {
    /// Reject thresholds that cannot describe a share or ratio.
    pub fn validate(&self) -> Result<()> {
        let q = &self.quality;
        let shares = [
            ("zero_share_threshold", q.zero_share_threshold),
            ("near_unique_ratio", q.near_unique_ratio),
            ("too_many_missing_share", q.too_many_missing_share),
        ];
        for (name, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(EdaError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        if self.top_k_categories == 0 {
            return Err(EdaError::Config(
                "top_k_categories must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything computed for one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    /// Metadata about the source file, when loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Per-column statistics.
    pub summary: DatasetSummary,
    /// Missing counts and shares.
    pub missing: MissingTable,
    /// Quality flags and score.
    pub flags: QualityFlags,
    /// Numeric correlation matrix.
    pub correlation: CorrelationMatrix,
    /// Most frequent categorical values.
    pub top_categories: TopCategoriesTable,
    /// Human-readable recommendation.
    pub recommendation: String,
}

/// The main analysis engine.
pub struct Eda {
    config: EdaConfig,
    parser: Parser,
    summarizer: DatasetSummarizer,
    quality: QualityFlagEngine,
    correlation: CorrelationAnalyzer,
    categories: CategoryProfiler,
}

impl Eda {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EdaConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EdaConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser.clone()),
            summarizer: DatasetSummarizer::new(),
            quality: QualityFlagEngine::with_config(config.quality.clone()),
            correlation: CorrelationAnalyzer::new(),
            categories: CategoryProfiler::new(config.max_category_columns, config.top_k_categories),
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Load a delimited file and analyze it.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<EdaReport> {
        let (table, source) = self.parser.parse_file(path)?;
        let mut report = self.analyze_table(&table);
        report.source = Some(source);
        Ok(report)
    }

    /// Analyze a table that is already in memory.
    pub fn analyze_table(&self, table: &DataTable) -> EdaReport {
        let summary = self.summarizer.summarize(table);
        let missing = missing_table(table);
        let flags = self.quality.evaluate(&summary, &missing, table);
        let correlation = self.correlation.analyze(table);
        let top_categories = self.categories.profile(table);
        let recommendation = recommendation(&flags);

        info!(
            rows = summary.n_rows,
            columns = summary.n_cols,
            score = flags.quality_score,
            "Analysis complete"
        );

        EdaReport {
            source: None,
            summary,
            missing,
            flags,
            correlation,
            top_categories,
            recommendation,
        }
    }
}

impl Default for Eda {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a recommendation based on the flags.
pub fn recommendation(flags: &QualityFlags) -> String {
    let score = flags.quality_score;
    let first_issue = flags
        .findings()
        .next()
        .map(|(flag, finding)| format!(" Start with `{}` ({}).", finding.column, flag));

    if score >= 0.9 && first_issue.is_none() {
        "Data quality is good. No issues detected.".to_string()
    } else if score >= 0.9 {
        format!(
            "Data quality is good. Minor issues detected for review.{}",
            first_issue.unwrap_or_default()
        )
    } else if score >= 0.7 {
        format!(
            "Data quality is acceptable (score: {:.0}%). Consider addressing the flagged columns.{}",
            score * 100.0,
            first_issue.unwrap_or_default()
        )
    } else {
        format!(
            "Data quality needs attention (score: {:.0}%). Review all flags before modeling.{}",
            score * 100.0,
            first_issue.unwrap_or_default()
        )
    }
}
