//! End-to-end tests for the cleaning pipeline.

use munge_model::{FillStrategy, GroupKey, MungeOptions};
use munge_transform::{MungePipeline, PipelineStep, TransformError};
use polars::prelude::{Column, DataFrame, NamedFrom};

fn passengers() -> DataFrame {
    DataFrame::new(vec![
        Column::new("PassengerId".into(), vec![1i64, 2, 3, 4]),
        Column::new(
            "Name".into(),
            vec![
                "Braund, Mr. Owen Harris",
                "Cumings, Mr. John Bradley",
                "Heikkinen, Miss. Laina",
                "Futrelle, Miss. Lily May",
            ],
        ),
        Column::new("Pclass".into(), vec![3i64, 3, 3, 3]),
        Column::new("Sex".into(), vec!["male", "male", "female", "female"]),
        Column::new("Age".into(), vec![Some(22.0), None, Some(26.0), None]),
        Column::new("Fare".into(), vec![7.25, 512.3292, 7.925, 53.1]),
        Column::new(
            "Ticket".into(),
            vec!["A/5 21171", "PC 17599", "STON/O2. 3101282", "113803"],
        ),
        Column::new("Cabin".into(), vec![None, Some("C85"), None, Some("C123")]),
    ])
    .unwrap()
}

fn f64_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name).unwrap().f64().unwrap().into_iter().collect()
}

#[test]
fn fills_every_missing_age_and_leaves_fare_alone() {
    let input = passengers();
    let outcome = MungePipeline::new(MungeOptions::default())
        .run(&input)
        .unwrap();
    let frame = &outcome.frame;

    assert_eq!(frame.height(), input.height());
    assert_eq!(frame.column("Age").unwrap().null_count(), 0);
    assert_eq!(
        f64_values(frame, "Age"),
        vec![Some(22.0), Some(22.0), Some(26.0), Some(26.0)]
    );
    assert_eq!(
        f64_values(frame, "Fare"),
        vec![Some(7.25), Some(512.3292), Some(7.925), Some(53.1)]
    );
    assert_eq!(outcome.fill.missing_before, 2);
    assert_eq!(outcome.fill.filled, 2);
}

#[test]
fn drops_two_columns_and_adds_two() {
    let outcome = MungePipeline::new(MungeOptions::default())
        .run(&passengers())
        .unwrap();
    let names = outcome.frame.get_column_names_str();
    assert!(!names.contains(&"Ticket"));
    assert!(!names.contains(&"Cabin"));
    assert!(names.contains(&"Salutation"));
    assert!(names.contains(&"New_Salutation"));
    assert_eq!(outcome.frame.width(), passengers().width());
}

#[test]
fn every_step_preserves_row_count_and_order() {
    let input = passengers();
    let outcome = MungePipeline::new(MungeOptions::default())
        .run(&input)
        .unwrap();

    let steps: Vec<PipelineStep> = outcome.steps.iter().map(|s| s.step).collect();
    assert_eq!(
        steps,
        vec![
            PipelineStep::Prune,
            PipelineStep::ExtractSalutation,
            PipelineStep::CollapseSalutation,
            PipelineStep::Impute,
        ]
    );
    for step in &outcome.steps {
        assert_eq!(step.rows_in, input.height());
        assert_eq!(step.rows_out, input.height());
    }
    assert_eq!(outcome.steps[0].columns_removed, vec!["Ticket", "Cabin"]);
    assert_eq!(outcome.steps[1].columns_added, vec!["Salutation"]);
    assert_eq!(outcome.steps[2].columns_added, vec!["New_Salutation"]);
    assert!(outcome.steps[3].columns_added.is_empty());

    let ids: Vec<Option<i64>> = outcome
        .frame
        .column("PassengerId")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn statistic_is_keyed_by_salutation_class_and_sex() {
    let outcome = MungePipeline::new(MungeOptions::default())
        .run(&passengers())
        .unwrap();
    let statistic = outcome.statistic.expect("grouped statistic");
    assert_eq!(statistic.group_by(), ["New_Salutation", "Pclass", "Sex"]);
    assert_eq!(statistic.get(&GroupKey::new(["Mr", "3", "male"])), Some(22.0));
    assert_eq!(
        statistic.get(&GroupKey::new(["Miss", "3", "female"])),
        Some(26.0)
    );
}

#[test]
fn rare_titles_collapse_to_fallback() {
    let mut input = passengers();
    input
        .with_column(Column::new(
            "Name".into(),
            vec![
                "Braund, Mr. Owen Harris",
                "Uruchurtu, Don. Manuel E",
                "Heikkinen, Miss. Laina",
                "Futrelle, Miss. Lily May",
            ],
        ))
        .unwrap();
    input
        .with_column(Column::new(
            "Age".into(),
            vec![Some(22.0), Some(40.0), Some(26.0), None],
        ))
        .unwrap();

    let outcome = MungePipeline::new(MungeOptions::default())
        .run(&input)
        .unwrap();
    let raw = outcome.frame.column("Salutation").unwrap().str().unwrap();
    let grouped = outcome.frame.column("New_Salutation").unwrap().str().unwrap();
    assert_eq!(raw.get(1), Some("Don"));
    assert_eq!(grouped.get(1), Some("Others"));
    assert_eq!(grouped.get(0), Some("Mr"));
}

#[test]
fn unseen_key_combination_fails_loudly() {
    let mut input = passengers();
    // The only male "Mr" in first class has no known age.
    input
        .with_column(Column::new("Pclass".into(), vec![3i64, 1, 3, 3]))
        .unwrap();

    let err = MungePipeline::new(MungeOptions::default())
        .run(&input)
        .unwrap_err();
    match err {
        TransformError::MissingStatistic { row, key } => {
            assert_eq!(row, 1);
            assert_eq!(key, GroupKey::new(["Mr", "1", "male"]));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_name_fails_with_row() {
    let mut input = passengers();
    input
        .with_column(Column::new(
            "Name".into(),
            vec![
                "Braund, Mr. Owen Harris",
                "Cumings, Mr. John Bradley",
                "Laina Heikkinen",
                "Futrelle, Miss. Lily May",
            ],
        ))
        .unwrap();

    let err = MungePipeline::new(MungeOptions::default())
        .run(&input)
        .unwrap_err();
    assert!(matches!(
        err,
        TransformError::MalformedText { row: 2, .. }
    ));
    assert!(err.to_string().contains("Laina Heikkinen"));
}

#[test]
fn mean_strategy_skips_grouped_statistic() {
    let options = MungeOptions::default().with_strategy(FillStrategy::GlobalMean);
    let outcome = MungePipeline::new(options).run(&passengers()).unwrap();
    assert!(outcome.statistic.is_none());
    assert_eq!(outcome.fill.value, Some(24.0));
    assert_eq!(
        f64_values(&outcome.frame, "Age"),
        vec![Some(22.0), Some(24.0), Some(26.0), Some(24.0)]
    );
}

#[test]
fn sparse_columns_pruned_when_ratio_set() {
    let mut input = passengers();
    input
        .with_column(Column::new(
            "Boat".into(),
            vec![None, None, None, Some("13")],
        ))
        .unwrap();
    let options = MungeOptions::default().with_max_missing_ratio(Some(0.4));
    let outcome = MungePipeline::new(options).run(&input).unwrap();
    let names = outcome.frame.get_column_names_str();
    assert!(!names.contains(&"Boat"));
    // Age is half missing but required, so it stays.
    assert!(names.contains(&"Age"));
}

#[test]
fn unknown_drop_column_is_error() {
    let options = MungeOptions::default().with_drop(vec!["Embarked".to_string()]);
    let err = MungePipeline::new(options).run(&passengers()).unwrap_err();
    assert!(matches!(err, TransformError::ColumnNotFound { .. }));
}

fn mixed_sex_rare_titles() -> DataFrame {
    DataFrame::new(vec![
        Column::new("PassengerId".into(), vec![1i64, 2, 3, 4]),
        Column::new(
            "Name".into(),
            vec![
                "Minahan, Dr. William Edward",
                "Leader, Dr. Alice (Farnham)",
                "Braund, Mr. Owen Harris",
                "Moran, Mr. James",
            ],
        ),
        Column::new("Pclass".into(), vec![1i64, 1, 3, 3]),
        Column::new("Sex".into(), vec!["male", "female", "male", "male"]),
        Column::new("Age".into(), vec![Some(44.0), None, Some(22.0), None]),
        Column::new("Fare".into(), vec![90.0, 25.9292, 7.25, 8.4583]),
        Column::new("Ticket".into(), vec!["19928", "17465", "A/5 21171", "330877"]),
        Column::new("Cabin".into(), vec![Some("C78"), Some("D17"), None, None]),
    ])
    .unwrap()
}

#[test]
fn salutation_and_class_key_ignores_sex() {
    let mut options = MungeOptions::default();
    options.impute.group_by = vec!["New_Salutation".to_string(), "Pclass".to_string()];
    let outcome = MungePipeline::new(options)
        .run(&mixed_sex_rare_titles())
        .unwrap();

    let statistic = outcome.statistic.as_ref().unwrap();
    assert_eq!(statistic.group_by(), ["New_Salutation", "Pclass"]);
    assert_eq!(statistic.get(&GroupKey::new(["Others", "1"])), Some(44.0));
    assert_eq!(
        f64_values(&outcome.frame, "Age"),
        vec![Some(44.0), Some(44.0), Some(22.0), Some(22.0)]
    );
}

#[test]
fn default_key_splits_rare_titles_by_sex() {
    let err = MungePipeline::new(MungeOptions::default())
        .run(&mixed_sex_rare_titles())
        .unwrap_err();
    match err {
        TransformError::MissingStatistic { row, key } => {
            assert_eq!(row, 1);
            assert_eq!(key, GroupKey::new(["Others", "1", "female"]));
        }
        other => panic!("unexpected error: {other}"),
    }
}
