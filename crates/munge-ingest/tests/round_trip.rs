//! Write-then-read of a table with missing cells.

use munge_ingest::{read_csv_table, write_csv_table};
use polars::prelude::{Column, DataFrame, NamedFrom};

#[test]
fn nulls_survive_write_and_read() {
    let mut df = DataFrame::new(vec![
        Column::new("PassengerId".into(), vec![1i64, 2, 3]),
        Column::new("Age".into(), vec![Some(22.0f64), None, Some(0.42)]),
        Column::new("Sex".into(), vec![Some("male"), Some("female"), None]),
    ])
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cleaned.csv");
    write_csv_table(&mut df, &path).unwrap();

    let loaded = read_csv_table(&path).unwrap();
    assert_eq!(loaded.height(), 3);
    assert_eq!(loaded.get_column_names(), df.get_column_names());
    let age = loaded.column("Age").unwrap().f64().unwrap();
    assert_eq!(age.get(0), Some(22.0));
    assert_eq!(age.get(1), None);
    assert_eq!(age.get(2), Some(0.42));
    assert_eq!(loaded.column("Sex").unwrap().null_count(), 1);
}
