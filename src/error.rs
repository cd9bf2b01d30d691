//! Error types.
//!
//! `SampleError` is what a sampler call can fail with. `DataError` covers
//! building a table and moving it through CSV.

use thiserror::Error;

use crate::table::RowId;

/// Why a sampling call was rejected.
///
/// Every variant is a deterministic validation failure: retrying with the same
/// inputs fails the same way, and the input table is never modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// The amount column is missing or holds a non-numeric cell.
    #[error("invalid amount column `{column}`: {reason}")]
    InvalidColumn { column: String, reason: String },

    /// A numeric parameter (`n`, `k`, `target_coverage`) is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Coverage needs a finite, positive total to divide by.
    #[error("amount total must be finite and > 0 for coverage sampling (got {total})")]
    DegenerateInput { total: f64 },
}

impl SampleError {
    pub(crate) fn missing_column(column: &str) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: "no such column".to_string(),
        }
    }

    pub(crate) fn non_numeric(column: &str, row: RowId, found: &str) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: format!("row {row} is not numeric (found {found:?})"),
        }
    }

    pub(crate) fn out_of_range(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised while building a [`Table`](crate::Table) or moving one
/// through CSV.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input had no header record.
    #[error("empty input: no header row")]
    EmptyInput,

    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    #[error("duplicate column name `{0}`")]
    DuplicateColumn(String),

    /// A row's width does not match the header.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Result alias for sampler calls.
pub type Result<T, E = SampleError> = std::result::Result<T, E>;
