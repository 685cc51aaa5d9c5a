//! Error types for the EDA library.
//!
//! Only loading and serialization can fail. The analysis functions themselves
//! are total over any [`DataTable`](crate::input::DataTable).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for EDA operations.
#[derive(Debug, Error)]
pub enum EdaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no columns to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for EDA operations.
pub type Result<T> = std::result::Result<T, EdaError>;
