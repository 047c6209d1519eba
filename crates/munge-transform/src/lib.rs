//! Passenger table transformations.
//!
//! This crate provides the cleaning steps, each taking a table and returning
//! a new one:
//!
//! - **prune**: drop named or sparse columns
//! - **salutation**: parse titles out of the name field and collapse rare ones
//! - **grouped**: median of a numeric column per categorical key combination
//! - **impute**: fill missing numeric cells from a grouped statistic or mean
//! - **pipeline**: the steps above in order, with row-count checks

pub mod data_utils;
pub mod error;
pub mod grouped;
pub mod impute;
pub mod pipeline;
pub mod prune;
pub mod salutation;

pub use error::{Result, TransformError};
pub use grouped::{GroupedStatistic, PivotTable};
pub use impute::{FillReport, fill_from_groups, fill_with_mean};
pub use pipeline::{MungeOutcome, MungePipeline, PipelineStep, StepSummary};
pub use prune::{drop_columns, sparse_columns};
pub use salutation::{
    SalutationError, SalutationGroups, collapse_salutations, extract_salutations,
    parse_salutation,
};
