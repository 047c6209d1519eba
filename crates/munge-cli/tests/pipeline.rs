//! Integration tests for the command stages.

use std::fs;
use std::path::Path;

use munge_cli::pipeline::{OptionOverrides, clean, ingest, output, resolve_options};
use munge_model::FillStrategy;
use tempfile::TempDir;

const PASSENGERS: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,1,1,\"Cumings, Mrs. John Bradley (Florence Briggs Thayer)\",female,38,1,0,PC 17599,71.2833,C85,C
3,1,3,\"Heikkinen, Miss. Laina\",female,26,0,0,STON/O2. 3101282,7.925,,S
4,1,1,\"Futrelle, Mrs. Jacques Heath (Lily May Peel)\",female,,1,0,113803,53.1,C123,S
5,0,3,\"Allen, Mr. William Henry\",male,35,0,0,373450,8.05,,S
6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q
7,0,1,\"Uruchurtu, Don. Manuel E\",male,40,0,0,PC 17601,27.7208,,C
8,1,3,\"Sandstrom, Miss. Marguerite Rut\",female,,1,1,PP 9549,16.7,G6,S
";

fn write_input(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("train.csv");
    fs::write(&path, PASSENGERS).unwrap();
    path
}

fn header(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string()
}

#[test]
fn clean_writes_imputed_table() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let options = resolve_options(None, &OptionOverrides::default()).unwrap();

    let df = ingest(&input).unwrap();
    assert_eq!(df.height(), 8);

    let mut outcome = clean(&df, options).unwrap();
    assert_eq!(outcome.frame.height(), 8);
    assert_eq!(outcome.fill.missing_before, 3);
    assert_eq!(outcome.fill.filled, 3);
    assert_eq!(outcome.frame.column("Age").unwrap().null_count(), 0);

    let ages: Vec<Option<f64>> = outcome
        .frame
        .column("Age")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    // Mrs/1/female -> 38, Mr/3/male -> median(22, 35), Miss/3/female -> 26.
    assert_eq!(ages[3], Some(38.0));
    assert_eq!(ages[5], Some(28.5));
    assert_eq!(ages[7], Some(26.0));

    let target = dir.path().join("clean.csv");
    let written = output(&mut outcome.frame, &target).unwrap();
    assert_eq!(written, target);
    let header = header(&target);
    assert!(header.contains("New_Salutation"));
    assert!(!header.contains("Ticket"));
    assert!(!header.contains("Cabin"));
}

#[test]
fn rare_title_lands_in_fallback_group() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let options = resolve_options(None, &OptionOverrides::default()).unwrap();

    let outcome = clean(&ingest(&input).unwrap(), options).unwrap();
    let grouped: Vec<Option<&str>> = outcome
        .frame
        .column("New_Salutation")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(grouped[6], Some("Others"));
    let raw = outcome.frame.column("Salutation").unwrap().str().unwrap();
    assert_eq!(raw.get(6), Some("Don"));
}

#[test]
fn overrides_replace_config_values() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("munge.toml");
    fs::write(
        &config,
        "[prune]\ndrop = [\"Ticket\"]\n\n[impute]\nstrategy = \"grouped_median\"\n",
    )
    .unwrap();

    let from_file = resolve_options(Some(&config), &OptionOverrides::default()).unwrap();
    assert_eq!(from_file.prune.drop, vec!["Ticket".to_string()]);
    assert_eq!(from_file.impute.strategy, FillStrategy::GroupedMedian);

    let overrides = OptionOverrides {
        strategy: Some(FillStrategy::GlobalMean),
        drop: vec!["Cabin".to_string(), "Embarked".to_string()],
        max_missing_ratio: Some(0.5),
    };
    let merged = resolve_options(Some(&config), &overrides).unwrap();
    assert_eq!(merged.impute.strategy, FillStrategy::GlobalMean);
    assert_eq!(
        merged.prune.drop,
        vec!["Cabin".to_string(), "Embarked".to_string()]
    );
    assert_eq!(merged.prune.max_missing_ratio, Some(0.5));
}

#[test]
fn out_of_range_ratio_is_rejected() {
    let overrides = OptionOverrides {
        max_missing_ratio: Some(1.5),
        ..OptionOverrides::default()
    };
    let error = resolve_options(None, &overrides).unwrap_err();
    assert!(format!("{error:#}").contains("max_missing_ratio"));
}

#[test]
fn mean_strategy_fills_with_single_value() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let overrides = OptionOverrides {
        strategy: Some(FillStrategy::GlobalMean),
        ..OptionOverrides::default()
    };
    let options = resolve_options(None, &overrides).unwrap();

    let outcome = clean(&ingest(&input).unwrap(), options).unwrap();
    assert!(outcome.statistic.is_none());
    // mean(22, 38, 26, 35, 40) = 32.2
    let value = outcome.fill.value.unwrap();
    assert!((value - 32.2).abs() < 1e-9);
    assert_eq!(outcome.fill.filled, 3);
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");
    let error = ingest(&missing).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn unknown_drop_column_fails_clean() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let overrides = OptionOverrides {
        drop: vec!["Boat".to_string()],
        ..OptionOverrides::default()
    };
    let options = resolve_options(None, &overrides).unwrap();
    let error = clean(&ingest(&input).unwrap(), options).unwrap_err();
    assert!(format!("{error:#}").contains("Boat"));
}
