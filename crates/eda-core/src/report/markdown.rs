//! Markdown rendering of a full analysis.

use std::fmt::Write;

use crate::eda::EdaReport;

use super::flatten::{
    flatten_categories_for_print, flatten_correlation_for_print, flatten_summary_for_print,
};

/// Options controlling the Markdown report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Report heading.
    pub title: String,
    /// Columns at or above this missing share are listed as problematic.
    pub min_missing_share: f64,
    /// Number of strongest correlation pairs to list.
    pub correlation_pairs: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "EDA report".to_string(),
            min_missing_share: 0.1,
            correlation_pairs: 5,
        }
    }
}

/// Render the report as a Markdown document.
pub fn render_markdown(report: &EdaReport, options: &ReportOptions) -> String {
    let mut md = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut md, report, options);
    md
}

fn write_report(md: &mut String, report: &EdaReport, options: &ReportOptions) -> std::fmt::Result {
    let summary = &report.summary;
    let flags = &report.flags;

    writeln!(md, "# {}", options.title)?;
    writeln!(md)?;
    if let Some(source) = &report.source {
        writeln!(md, "Source file: `{}` ({}, {})", source.file, source.format, source.hash)?;
        writeln!(md)?;
    }
    writeln!(md, "Rows: **{}**, columns: **{}**", summary.n_rows, summary.n_cols)?;
    writeln!(md)?;

    writeln!(md, "## Data quality")?;
    writeln!(md)?;
    writeln!(md, "Quality score: **{:.2}**", flags.quality_score)?;
    writeln!(md)?;
    writeln!(md, "{}", report.recommendation)?;
    writeln!(md)?;
    for (name, value) in flags.entries() {
        writeln!(md, "- `{}`: {}", name, value)?;
    }
    writeln!(md)?;

    if flags.penalties.is_empty() {
        writeln!(md, "No penalties applied.")?;
    } else {
        writeln!(md, "Penalties:")?;
        writeln!(md)?;
        for penalty in &flags.penalties {
            writeln!(md, "- {}: -{:.3}", penalty.source, penalty.amount)?;
        }
    }
    writeln!(md)?;

    let findings: Vec<_> = flags.findings().collect();
    if !findings.is_empty() {
        writeln!(md, "Affected columns:")?;
        writeln!(md)?;
        for (flag, finding) in findings {
            writeln!(md, "- `{}` ({}): {}", finding.column, flag, finding.detail)?;
        }
        writeln!(md)?;
    }

    writeln!(md, "## Columns")?;
    writeln!(md)?;
    if summary.columns.is_empty() {
        writeln!(md, "The dataset has no columns.")?;
    } else {
        write!(md, "{}", flatten_summary_for_print(summary).to_markdown())?;
    }
    writeln!(md)?;

    writeln!(md, "## Missing values")?;
    writeln!(md)?;
    let problematic = report.missing.columns_at_least(options.min_missing_share);
    if problematic.is_empty() {
        writeln!(
            md,
            "No columns with a missing share of {:.0}% or more.",
            options.min_missing_share * 100.0
        )?;
    } else {
        writeln!(
            md,
            "Columns with a missing share of {:.0}% or more:",
            options.min_missing_share * 100.0
        )?;
        writeln!(md)?;
        for name in problematic {
            let share = report.missing.get(name).map(|e| e.missing_share).unwrap_or(0.0);
            writeln!(md, "- `{}`: {:.1}%", name, share * 100.0)?;
        }
    }
    writeln!(md)?;

    writeln!(md, "## Correlation")?;
    writeln!(md)?;
    if report.correlation.is_empty() {
        writeln!(md, "Fewer than two numeric columns; no correlation matrix.")?;
    } else {
        write!(md, "{}", flatten_correlation_for_print(&report.correlation).to_markdown())?;
        let pairs = report.correlation.strongest_pairs(options.correlation_pairs);
        if !pairs.is_empty() {
            writeln!(md)?;
            writeln!(md, "Strongest pairs:")?;
            writeln!(md)?;
            for (a, b, r) in pairs {
                writeln!(md, "- `{}` / `{}`: {:.3}", a, b, r)?;
            }
        }
    }
    writeln!(md)?;

    writeln!(md, "## Top categories")?;
    writeln!(md)?;
    if report.top_categories.is_empty() {
        writeln!(md, "No categorical columns.")?;
    }
    for (column, values) in &report.top_categories {
        writeln!(md, "### {}", column)?;
        writeln!(md)?;
        write!(md, "{}", flatten_categories_for_print(values).to_markdown())?;
        writeln!(md)?;
    }

    Ok(())
}
