//! Grouped statistics.
//!
//! A [`GroupedStatistic`] maps each observed combination of categorical
//! values to the median of a numeric column over the rows sharing that
//! combination. Rows with a missing target or a missing key cell do not
//! contribute, and combinations without any contributing row have no entry.

use std::collections::{BTreeMap, BTreeSet};

use munge_model::GroupKey;
use polars::prelude::{Column, DataFrame, DataType, Expr, IntoLazy, PolarsResult, col};
use tracing::debug;

use crate::data_utils::{require_column, require_numeric, row_key};
use crate::error::{Result, TransformError};

const STAT_COLUMN: &str = "__statistic";
const SUPPORT_COLUMN: &str = "__support";

/// Immutable lookup from group key to an aggregate of the target column.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedStatistic {
    target: String,
    group_by: Vec<String>,
    values: BTreeMap<GroupKey, f64>,
    support: BTreeMap<GroupKey, usize>,
}

impl GroupedStatistic {
    /// Median of `target` per combination of `group_by` values.
    ///
    /// Even-sized groups use the midpoint of the two middle values.
    pub fn median(df: &DataFrame, target: &str, group_by: &[String]) -> Result<Self> {
        if group_by.is_empty() {
            return Err(TransformError::EmptyGroupBy);
        }
        require_numeric(df, target)?;
        for name in group_by {
            require_column(df, name)?;
        }

        let present = group_by.iter().fold(col(target).is_not_null(), |acc, name| {
            acc.and(col(name.as_str()).is_not_null())
        });
        let keys: Vec<Expr> = group_by.iter().map(|name| col(name.as_str())).collect();
        let grouped = df
            .clone()
            .lazy()
            .filter(present)
            .group_by(keys)
            .agg([
                col(target)
                    .cast(DataType::Float64)
                    .median()
                    .alias(STAT_COLUMN),
                col(target).count().alias(SUPPORT_COLUMN),
            ])
            .collect()?;

        let key_columns = group_by
            .iter()
            .map(|name| grouped.column(name))
            .collect::<PolarsResult<Vec<&Column>>>()?;
        let stat = grouped.column(STAT_COLUMN)?.f64()?;
        let counts = grouped
            .column(SUPPORT_COLUMN)?
            .cast(&DataType::UInt64)?;
        let counts = counts.u64()?;

        let mut values = BTreeMap::new();
        let mut support = BTreeMap::new();
        for row in 0..grouped.height() {
            let key = row_key(group_by, &key_columns, row)?;
            let Some(value) = stat.get(row) else {
                continue;
            };
            let count = counts.get(row).unwrap_or(0) as usize;
            debug!(%key, value, count, "group median");
            values.insert(key.clone(), value);
            support.insert(key, count);
        }

        Ok(Self {
            target: target.to_string(),
            group_by: group_by.to_vec(),
            values,
            support,
        })
    }

    /// Build a statistic from known entries. Support counts are left at zero.
    pub fn from_entries<I>(target: impl Into<String>, group_by: Vec<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (GroupKey, f64)>,
    {
        let values: BTreeMap<GroupKey, f64> = entries.into_iter().collect();
        let support = values.keys().map(|key| (key.clone(), 0)).collect();
        Self {
            target: target.into(),
            group_by,
            values,
            support,
        }
    }

    pub fn get(&self, key: &GroupKey) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Number of rows that contributed to `key`.
    pub fn support(&self, key: &GroupKey) -> Option<usize> {
        self.support.get(key).copied()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, f64)> {
        self.values.iter().map(|(key, value)| (key, *value))
    }

    /// Lay the statistic out as a two-way table: the first key column down
    /// the side, the remaining key columns joined across the top.
    pub fn pivot(&self) -> PivotTable {
        let mut rows = BTreeSet::new();
        let mut columns = BTreeSet::new();
        let mut cells = BTreeMap::new();
        for (key, value) in self.iter() {
            let row = key.head().unwrap_or_default().to_string();
            let column = key.tail_label();
            rows.insert(row.clone());
            columns.insert(column.clone());
            cells.insert((row, column), value);
        }
        PivotTable {
            row_header: self.group_by.first().cloned().unwrap_or_default(),
            column_header: self
                .group_by
                .iter()
                .skip(1)
                .cloned()
                .collect::<Vec<_>>()
                .join("/"),
            rows: rows.into_iter().collect(),
            columns: columns.into_iter().collect(),
            cells,
        }
    }
}

/// Two-way layout of a [`GroupedStatistic`] for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    pub row_header: String,
    pub column_header: String,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    cells: BTreeMap<(String, String), f64>,
}

impl PivotTable {
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        self.cells.get(&(row.to_string(), column.to_string())).copied()
    }
}
