//! Property tests for salutation handling and grouped medians.

use munge_model::GroupKey;
use munge_transform::{GroupedStatistic, SalutationGroups, parse_salutation};
use polars::prelude::{Column, DataFrame, NamedFrom};
use proptest::prelude::*;

proptest! {
    #[test]
    fn collapse_is_total(value in ".*") {
        let groups = SalutationGroups::default();
        let out = groups.collapse(&value);
        if ["Mr", "Mrs", "Miss", "Master"].contains(&value.as_str()) {
            prop_assert_eq!(out, value.as_str());
        } else {
            prop_assert_eq!(out, "Others");
        }
    }

    #[test]
    fn parse_recovers_title(
        family in "[A-Za-z' -]{1,12}",
        title in "[A-Za-z]{1,10}",
        given in "[A-Za-z() .]{0,20}",
    ) {
        let name = format!("{family}, {title}. {given}");
        prop_assert_eq!(parse_salutation(&name), Ok(title.as_str()));
    }

    #[test]
    fn parse_without_comma_always_fails(text in "[^,]*") {
        prop_assert!(parse_salutation(&text).is_err());
    }

    #[test]
    fn group_median_lies_within_group_range(
        ages in proptest::collection::vec(0.0f64..80.0, 1..40),
    ) {
        let sexes: Vec<&str> = ages
            .iter()
            .enumerate()
            .map(|(idx, _)| if idx % 2 == 0 { "male" } else { "female" })
            .collect();
        let df = DataFrame::new(vec![
            Column::new("Sex".into(), sexes.clone()),
            Column::new("Age".into(), ages.clone()),
        ])
        .unwrap();
        let stat = GroupedStatistic::median(&df, "Age", &["Sex".to_string()]).unwrap();

        for sex in ["male", "female"] {
            let group: Vec<f64> = ages
                .iter()
                .zip(&sexes)
                .filter(|(_, s)| **s == sex)
                .map(|(age, _)| *age)
                .collect();
            let key = GroupKey::new([sex]);
            if group.is_empty() {
                prop_assert!(stat.get(&key).is_none());
                continue;
            }
            let median = stat.get(&key).unwrap();
            let min = group.iter().copied().fold(f64::INFINITY, f64::min);
            let max = group.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(median >= min && median <= max);
            prop_assert_eq!(stat.support(&key), Some(group.len()));
        }
    }
}
