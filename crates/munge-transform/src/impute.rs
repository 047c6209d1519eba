//! Missing-value imputation.
//!
//! The target column is cast to `Float64` before filling. Present values keep
//! their numeric value; only null cells are written.

use std::collections::BTreeMap;

use munge_model::{FillStrategy, GroupKey};
use polars::prelude::{ChunkAgg, Column, DataFrame, DataType, NamedFrom, PolarsResult};
use tracing::{debug, info};

use crate::data_utils::{require_column, require_numeric, row_key};
use crate::error::{Result, TransformError};
use crate::grouped::GroupedStatistic;

/// What a fill pass changed.
#[derive(Debug, Clone, PartialEq)]
pub struct FillReport {
    pub target: String,
    pub strategy: FillStrategy,
    pub missing_before: usize,
    pub filled: usize,
    pub missing_after: usize,
    /// Cells filled per group key (grouped strategy only).
    pub by_key: BTreeMap<GroupKey, usize>,
    /// The single fill value (mean strategy only).
    pub value: Option<f64>,
}

impl FillReport {
    fn new(target: &str, strategy: FillStrategy) -> Self {
        Self {
            target: target.to_string(),
            strategy,
            missing_before: 0,
            filled: 0,
            missing_after: 0,
            by_key: BTreeMap::new(),
            value: None,
        }
    }
}

/// Fill missing cells of the statistic's target column from `statistic`.
///
/// Each null cell is looked up with the key formed by the row's values in the
/// statistic's group-by columns. A key with no entry is an error naming the
/// row and key; nothing is guessed.
pub fn fill_from_groups(
    df: &DataFrame,
    statistic: &GroupedStatistic,
) -> Result<(DataFrame, FillReport)> {
    let target = statistic.target();
    let values = require_numeric(df, target)?.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let key_columns = statistic
        .group_by()
        .iter()
        .map(|name| require_column(df, name))
        .collect::<Result<Vec<&Column>>>()?;

    let mut report = FillReport::new(target, FillStrategy::GroupedMedian);
    let mut filled = Vec::with_capacity(df.height());
    for (row, cell) in values.into_iter().enumerate() {
        if cell.is_some() {
            filled.push(cell);
            continue;
        }
        report.missing_before += 1;
        let key = row_key(statistic.group_by(), &key_columns, row)?;
        let value = statistic
            .get(&key)
            .ok_or_else(|| TransformError::MissingStatistic {
                row,
                key: key.clone(),
            })?;
        filled.push(Some(value));
        report.filled += 1;
        *report.by_key.entry(key).or_insert(0) += 1;
    }

    let out = replace_column(df, target, filled)?;
    report.missing_after = out.column(target)?.null_count();
    for (key, count) in &report.by_key {
        debug!(%key, count, "filled from group");
    }
    info!(
        column = %target,
        filled = report.filled,
        groups = report.by_key.len(),
        "filled missing values from grouped statistic"
    );
    Ok((out, report))
}

/// Fill missing cells of `target` with the mean of its present values.
pub fn fill_with_mean(df: &DataFrame, target: &str) -> Result<(DataFrame, FillReport)> {
    let values = require_numeric(df, target)?.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let mean = values.mean().ok_or_else(|| TransformError::NoValues {
        column: target.to_string(),
    })?;

    let mut report = FillReport::new(target, FillStrategy::GlobalMean);
    report.value = Some(mean);
    let filled: Vec<Option<f64>> = values
        .into_iter()
        .map(|cell| {
            if cell.is_none() {
                report.missing_before += 1;
                report.filled += 1;
            }
            Some(cell.unwrap_or(mean))
        })
        .collect();

    let out = replace_column(df, target, filled)?;
    report.missing_after = out.column(target)?.null_count();
    info!(column = %target, mean, filled = report.filled, "filled missing values with mean");
    Ok((out, report))
}

fn replace_column(df: &DataFrame, name: &str, values: Vec<Option<f64>>) -> PolarsResult<DataFrame> {
    let mut out = df.clone();
    out.with_column(Column::new(name.into(), values))?;
    Ok(out)
}
