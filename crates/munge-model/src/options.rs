//! Configuration options for the cleaning pipeline.
//!
//! Every section is optional in the TOML file; missing keys fall back to the
//! defaults used for the Kaggle Titanic table.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnRoles;
use crate::error::{ConfigError, Result};

/// How missing target values are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    /// Median of the target within each group-by key combination.
    #[default]
    GroupedMedian,
    /// Mean of all present target values.
    GlobalMean,
}

impl FillStrategy {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GroupedMedian => "grouped median",
            Self::GlobalMean => "global mean",
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Column pruning settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneOptions {
    /// Columns removed unconditionally.
    pub drop: Vec<String>,
    /// Also remove any column whose missing ratio is above this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_missing_ratio: Option<f64>,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            drop: vec!["Ticket".to_string(), "Cabin".to_string()],
            max_missing_ratio: None,
        }
    }
}

/// Salutation extraction and grouping settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalutationOptions {
    /// Labels kept as-is when grouping.
    pub kept: Vec<String>,
    /// Label assigned to every salutation not in `kept`.
    pub fallback: String,
    /// Column receiving the extracted salutation.
    pub raw_column: String,
    /// Column receiving the grouped salutation.
    pub grouped_column: String,
}

impl Default for SalutationOptions {
    fn default() -> Self {
        Self {
            kept: ["Mr", "Mrs", "Master", "Miss"]
                .into_iter()
                .map(String::from)
                .collect(),
            fallback: "Others".to_string(),
            raw_column: "Salutation".to_string(),
            grouped_column: "New_Salutation".to_string(),
        }
    }
}

/// Imputation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImputeOptions {
    pub strategy: FillStrategy,
    /// Group-by columns for [`FillStrategy::GroupedMedian`], in key order.
    pub group_by: Vec<String>,
}

impl Default for ImputeOptions {
    fn default() -> Self {
        Self {
            strategy: FillStrategy::default(),
            group_by: vec![
                "New_Salutation".to_string(),
                "Pclass".to_string(),
                "Sex".to_string(),
            ],
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MungeOptions {
    pub columns: ColumnRoles,
    pub prune: PruneOptions,
    pub salutation: SalutationOptions,
    pub impute: ImputeOptions,
}

impl MungeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: FillStrategy) -> Self {
        self.impute.strategy = strategy;
        self
    }

    pub fn with_drop(mut self, columns: Vec<String>) -> Self {
        self.prune.drop = columns;
        self
    }

    pub fn with_max_missing_ratio(mut self, ratio: Option<f64>) -> Self {
        self.prune.max_missing_ratio = ratio;
        self
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        let options: Self = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Check settings that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(ratio) = self.prune.max_missing_ratio
            && !(0.0..=1.0).contains(&ratio)
        {
            return Err(ConfigError::Invalid {
                field: "prune.max_missing_ratio",
                reason: format!("{ratio} is outside 0.0..=1.0"),
            });
        }
        if self.impute.strategy == FillStrategy::GroupedMedian && self.impute.group_by.is_empty()
        {
            return Err(ConfigError::Invalid {
                field: "impute.group_by",
                reason: "grouped median needs at least one column".to_string(),
            });
        }
        if self.salutation.fallback.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "salutation.fallback",
                reason: "fallback label is empty".to_string(),
            });
        }
        if self.salutation.raw_column == self.salutation.grouped_column {
            return Err(ConfigError::Invalid {
                field: "salutation.grouped_column",
                reason: "must differ from salutation.raw_column".to_string(),
            });
        }
        Ok(())
    }
}

/// Load options from a TOML file.
pub fn load_options(path: &Path) -> Result<MungeOptions> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    MungeOptions::from_toml_str(&contents, path)
}
