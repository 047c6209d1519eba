//! Category frequencies.

use std::collections::BTreeMap;

use anyhow::Context;
use munge_ingest::any_to_string;
use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Row count per distinct value of `column`, sorted by label. Nulls are not
/// counted.
pub fn category_counts(df: &DataFrame, column: &str) -> anyhow::Result<Vec<CategoryCount>> {
    let series = df
        .column(column)
        .with_context(|| format!("count categories of {column}"))?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in 0..df.height() {
        let value = series.get(row)?;
        if matches!(value, AnyValue::Null) {
            continue;
        }
        *counts.entry(any_to_string(value)).or_insert(0) += 1;
    }
    Ok(counts
        .into_iter()
        .map(|(label, count)| CategoryCount { label, count })
        .collect())
}
