//! First rows of a table rendered as text.

use munge_ingest::any_to_string;
use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;

/// Text shown for a null cell.
pub const MISSING_MARKER: &str = "NaN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Render the first `n` rows of `df`.
pub fn preview(df: &DataFrame, n: usize) -> anyhow::Result<Preview> {
    let head = df.head(Some(n));
    let headers = head
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut rows = Vec::with_capacity(head.height());
    for row in 0..head.height() {
        let mut cells = Vec::with_capacity(head.width());
        for column in head.get_columns() {
            let value = column.get(row)?;
            cells.push(match value {
                AnyValue::Null => MISSING_MARKER.to_string(),
                other => any_to_string(other),
            });
        }
        rows.push(cells);
    }
    Ok(Preview { headers, rows })
}
