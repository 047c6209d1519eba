//! Per-column numeric summary.

use munge_transform::data_utils::is_numeric_dtype;
use polars::prelude::{ChunkAgg, ChunkQuantile, ChunkVar, DataFrame, DataType, QuantileMethod};
use serde::Serialize;

/// Count, mean, spread and quartiles of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescription {
    pub column: String,
    /// Non-missing cells.
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Describe every numeric column of `df`, in table order.
pub fn describe(df: &DataFrame) -> anyhow::Result<Vec<ColumnDescription>> {
    let mut out = Vec::new();
    for column in df.get_columns() {
        if !is_numeric_dtype(column.dtype()) {
            continue;
        }
        let cast = column.cast(&DataType::Float64)?;
        let values = cast.f64()?;
        out.push(ColumnDescription {
            column: column.name().to_string(),
            count: values.len() - values.null_count(),
            mean: values.mean(),
            std: values.std(1),
            min: values.min(),
            q25: values.quantile(0.25, QuantileMethod::Linear)?,
            median: values.median(),
            q75: values.quantile(0.75, QuantileMethod::Linear)?,
            max: values.max(),
        });
    }
    Ok(out)
}
