use munge_model::GroupKey;
use thiserror::Error;

use crate::salutation::SalutationError;

/// Errors raised by the cleaning steps.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("column '{column}' has type {found}, expected {expected}")]
    UnexpectedType {
        column: String,
        expected: &'static str,
        found: String,
    },

    /// The text cell a derived value is parsed from is missing.
    #[error("row {row}: '{column}' is missing")]
    MissingText { row: usize, column: String },

    #[error("row {row}: cannot parse '{column}' value {value:?}: {source}")]
    MalformedText {
        row: usize,
        column: String,
        value: String,
        #[source]
        source: SalutationError,
    },

    /// A missing target cell whose key has no supporting statistic.
    #[error("row {row}: no statistic for key {key}")]
    MissingStatistic { row: usize, key: GroupKey },

    /// A missing target cell whose key itself has a missing part.
    #[error("row {row}: key column '{column}' is missing")]
    IncompleteKey { row: usize, column: String },

    #[error("no group-by columns given")]
    EmptyGroupBy,

    #[error("column '{column}' has no values to aggregate")]
    NoValues { column: String },

    #[error("step {step} changed row count from {before} to {after}")]
    RowCountChanged {
        step: &'static str,
        before: usize,
        after: usize,
    },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
