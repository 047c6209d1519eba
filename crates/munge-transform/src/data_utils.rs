//! DataFrame lookup helpers shared by the transformation steps.

use munge_ingest::any_to_string;
use munge_model::GroupKey;
use polars::prelude::{AnyValue, Column, DataFrame, DataType};

use crate::error::{Result, TransformError};

/// Get a column by exact name.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Get a column and check that it holds numbers.
pub fn require_numeric<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    let column = require_column(df, name)?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(TransformError::UnexpectedType {
            column: name.to_string(),
            expected: "numeric",
            found: column.dtype().to_string(),
        });
    }
    Ok(column)
}

pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Build the group key of one row from its key columns.
///
/// `names` and `columns` are parallel. Fails with [`TransformError::IncompleteKey`]
/// when any key cell is null.
pub fn row_key(names: &[String], columns: &[&Column], row: usize) -> Result<GroupKey> {
    let mut parts = Vec::with_capacity(columns.len());
    for (name, column) in names.iter().zip(columns) {
        let value = column.get(row)?;
        if matches!(value, AnyValue::Null) {
            return Err(TransformError::IncompleteKey {
                row,
                column: name.clone(),
            });
        }
        parts.push(any_to_string(value));
    }
    Ok(GroupKey::new(parts))
}

/// Column names of `after` that are not in `before`, and vice versa.
pub fn column_delta(before: &DataFrame, after: &DataFrame) -> (Vec<String>, Vec<String>) {
    let old: Vec<String> = before
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let new: Vec<String> = after
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let added = new.iter().filter(|n| !old.contains(n)).cloned().collect();
    let removed = old.iter().filter(|n| !new.contains(n)).cloned().collect();
    (added, removed)
}
