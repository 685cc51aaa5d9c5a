//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// eda: exploratory summaries and data-quality checks for tabular files
#[derive(Parser)]
#[command(name = "eda")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a summary of a data file and its quality flags
    Overview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (e.g. ",", ";", "tab"); detected when omitted
        #[arg(short, long)]
        sep: Option<String>,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a Markdown report and CSV tables to a directory
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for the generated files
    #[arg(short, long, default_value = "reports")]
    pub out_dir: PathBuf,

    /// Field delimiter (e.g. ",", ";", "tab"); detected when omitted
    #[arg(short, long)]
    pub sep: Option<String>,

    /// Report title
    #[arg(short, long, default_value = "EDA report")]
    pub title: String,

    /// Number of categorical columns to profile
    #[arg(long, default_value = "5")]
    pub max_category_columns: usize,

    /// Number of values kept per categorical column
    #[arg(long, default_value = "5")]
    pub top_k_categories: usize,

    /// List columns whose missing share is at least this value
    #[arg(long, default_value = "0.1")]
    pub min_missing_share: f64,

    /// Distinct values above which a categorical column is flagged
    #[arg(long, default_value = "50")]
    pub high_cardinality_threshold: usize,

    /// Zero share above which a numeric column is flagged
    #[arg(long, default_value = "0.5")]
    pub zero_share_threshold: f64,
}
