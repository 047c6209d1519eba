use polars::prelude::DataFrame;
use serde::Serialize;

/// Missing cells in one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
    /// `missing / rows`; zero for an empty table.
    pub ratio: f64,
}

pub fn missing_counts(df: &DataFrame) -> Vec<MissingCount> {
    let height = df.height();
    df.get_columns()
        .iter()
        .map(|column| {
            let missing = column.null_count();
            MissingCount {
                column: column.name().to_string(),
                missing,
                ratio: if height == 0 {
                    0.0
                } else {
                    missing as f64 / height as f64
                },
            }
        })
        .collect()
}
