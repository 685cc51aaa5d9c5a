//! Core type definitions for column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad data category of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-null value parses as a finite number.
    Numeric,
    /// At least one non-null value is not a number.
    Categorical,
    /// No non-null values to classify.
    #[default]
    Other,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    /// Returns true if this kind is categorical.
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnKind::Categorical)
    }

    /// Short lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Other => "other",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
