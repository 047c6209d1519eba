//! Column roles for the passenger table.

use serde::{Deserialize, Serialize};

/// Names of the source columns the pipeline depends on.
///
/// Defaults follow the Kaggle Titanic `train.csv` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRoles {
    /// Unique row identifier.
    pub id: String,
    /// Compound name field (`Family, Title. Given`).
    pub name: String,
    /// Numeric column that gets imputed.
    pub age: String,
    /// Passenger class.
    pub class: String,
    pub sex: String,
    /// Numeric column inspected for outliers.
    pub fare: String,
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self {
            id: "PassengerId".to_string(),
            name: "Name".to_string(),
            age: "Age".to_string(),
            class: "Pclass".to_string(),
            sex: "Sex".to_string(),
            fare: "Fare".to_string(),
        }
    }
}
