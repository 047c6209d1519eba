//! Grouped five-number summaries with Tukey fences.
//!
//! This is the tabular form of a box plot of one numeric column split by one
//! categorical column. Values beyond 1.5 × IQR from the quartiles are listed
//! so a reviewer can decide whether they are entry errors; they are never
//! altered here.

use anyhow::{Context, bail};
use munge_transform::data_utils::is_numeric_dtype;
use polars::prelude::{
    Column, DataFrame, DataType, IntoLazy, LazyFrame, NamedFrom, QuantileMethod,
    SortMultipleOptions, col, lit,
};
use serde::Serialize;

const FENCE_FACTOR: f64 = 1.5;

const GROUP: &str = "__group";
const VALUE: &str = "__value";
const ROW_ID: &str = "__id";

/// One value outside the fences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlier {
    /// Row identifier, or the row index when no identifier column is given.
    pub id: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub group: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outliers: Vec<Outlier>,
}

/// Summarize `value` per distinct `group`, sorted by group label.
///
/// Rows with a missing value or group are skipped.
pub fn box_summary(
    df: &DataFrame,
    value: &str,
    group: &str,
    id: Option<&str>,
) -> anyhow::Result<Vec<BoxSummary>> {
    let values = df
        .column(value)
        .with_context(|| format!("box summary of {value}"))?;
    if !is_numeric_dtype(values.dtype()) {
        bail!("column '{value}' is {}, expected numeric", values.dtype());
    }
    let groups = df
        .column(group)
        .with_context(|| format!("box summary grouped by {group}"))?;
    let ids = match id {
        Some(name) => df
            .column(name)
            .with_context(|| format!("row ids from {name}"))?
            .clone(),
        None => Column::new(ROW_ID.into(), (0..df.height() as u64).collect::<Vec<_>>()),
    };

    let rows = DataFrame::new(vec![
        groups.cast(&DataType::String)?.with_name(GROUP.into()),
        values.cast(&DataType::Float64)?.with_name(VALUE.into()),
        ids.cast(&DataType::String)?.with_name(ROW_ID.into()),
    ])?
    .lazy()
    .filter(col(GROUP).is_not_null().and(col(VALUE).is_not_null()));

    let stats = rows
        .clone()
        .group_by([col(GROUP)])
        .agg([
            col(VALUE).count().alias("count"),
            col(VALUE).min().alias("min"),
            col(VALUE)
                .quantile(lit(0.25), QuantileMethod::Linear)
                .alias("q1"),
            col(VALUE).median().alias("median"),
            col(VALUE)
                .quantile(lit(0.75), QuantileMethod::Linear)
                .alias("q3"),
            col(VALUE).max().alias("max"),
        ])
        .sort([GROUP], SortMultipleOptions::default())
        .collect()?;

    let labels = stats.column(GROUP)?.str()?;
    let counts = stats.column("count")?.cast(&DataType::UInt64)?;
    let counts = counts.u64()?;
    let mins = stats.column("min")?.f64()?;
    let q1s = stats.column("q1")?.f64()?;
    let medians = stats.column("median")?.f64()?;
    let q3s = stats.column("q3")?.f64()?;
    let maxes = stats.column("max")?.f64()?;

    let mut out = Vec::with_capacity(stats.height());
    for row in 0..stats.height() {
        let (Some(label), Some(count), Some(min), Some(q1), Some(median), Some(q3), Some(max)) = (
            labels.get(row),
            counts.get(row),
            mins.get(row),
            q1s.get(row),
            medians.get(row),
            q3s.get(row),
            maxes.get(row),
        ) else {
            continue;
        };
        let iqr = q3 - q1;
        let lower_fence = q1 - FENCE_FACTOR * iqr;
        let upper_fence = q3 + FENCE_FACTOR * iqr;
        out.push(BoxSummary {
            group: label.to_string(),
            count: count as usize,
            min,
            q1,
            median,
            q3,
            max,
            lower_fence,
            upper_fence,
            outliers: outliers(&rows, label, lower_fence, upper_fence)?,
        });
    }
    Ok(out)
}

/// Rows of `label` outside the fences, in table order.
fn outliers(
    rows: &LazyFrame,
    label: &str,
    lower_fence: f64,
    upper_fence: f64,
) -> anyhow::Result<Vec<Outlier>> {
    let outside = col(VALUE)
        .lt(lit(lower_fence))
        .or(col(VALUE).gt(lit(upper_fence)));
    let flagged = rows
        .clone()
        .filter(col(GROUP).eq(lit(label)).and(outside))
        .collect()?;
    let ids = flagged.column(ROW_ID)?.str()?;
    let values = flagged.column(VALUE)?.f64()?;
    Ok(ids
        .into_iter()
        .zip(values)
        .filter_map(|(id, value)| {
            Some(Outlier {
                id: id.unwrap_or_default().to_string(),
                value: value?,
            })
        })
        .collect())
}
