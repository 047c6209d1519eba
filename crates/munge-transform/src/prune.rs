//! Column pruning.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::data_utils::require_column;
use crate::error::Result;

/// Return a copy of `df` without `columns`.
///
/// Every named column must exist; a typo in the drop list is an error rather
/// than a silent no-op.
pub fn drop_columns(df: &DataFrame, columns: &[String]) -> Result<DataFrame> {
    for name in columns {
        require_column(df, name)?;
    }
    let mut out = df.clone();
    for name in columns {
        out = out.drop(name)?;
        debug!(column = %name, "dropped column");
    }
    Ok(out)
}

/// Columns whose share of missing cells is strictly above `max_ratio`.
///
/// Returned in table order. An empty table has no sparse columns.
pub fn sparse_columns(df: &DataFrame, max_ratio: f64) -> Vec<String> {
    let height = df.height();
    if height == 0 {
        return Vec::new();
    }
    df.get_columns()
        .iter()
        .filter(|column| column.null_count() as f64 / height as f64 > max_ratio)
        .map(|column| column.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use polars::prelude::{Column, NamedFrom};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("PassengerId".into(), vec![1i64, 2, 3, 4]),
            Column::new("Ticket".into(), vec!["A/5 21171", "PC 17599", "113803", "373450"]),
            Column::new("Cabin".into(), vec![None, Some("C85"), None, None]),
            Column::new("Age".into(), vec![Some(22.0), None, Some(26.0), Some(35.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_drop_columns() {
        let df = frame();
        let pruned = drop_columns(&df, &["Ticket".to_string(), "Cabin".to_string()]).unwrap();
        assert_eq!(pruned.get_column_names_str(), vec!["PassengerId", "Age"]);
        assert_eq!(pruned.height(), df.height());
        // Input untouched.
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn test_drop_unknown_column_fails() {
        let err = drop_columns(&frame(), &["Boat".to_string()]).unwrap_err();
        assert!(matches!(err, TransformError::ColumnNotFound { column } if column == "Boat"));
    }

    #[test]
    fn test_sparse_columns() {
        let df = frame();
        assert_eq!(sparse_columns(&df, 0.5), vec!["Cabin"]);
        assert_eq!(sparse_columns(&df, 0.2), vec!["Cabin", "Age"]);
        assert!(sparse_columns(&df, 0.75).is_empty());
    }
}
