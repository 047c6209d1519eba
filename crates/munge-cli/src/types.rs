use std::path::PathBuf;

use munge_report::{BoxSummary, CategoryCount, ColumnDescription, MissingCount, Preview};
use munge_transform::MungeOutcome;
use serde::Serialize;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub outcome: MungeOutcome,
    /// Parsed salutations before collapsing.
    pub salutations: Vec<CategoryCount>,
    /// Salutation groups after collapsing.
    pub groups: Vec<CategoryCount>,
    pub preview: Preview,
}

#[derive(Debug, Serialize)]
pub struct InspectResult {
    pub input: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub missing: Vec<MissingCount>,
    pub describe: Vec<ColumnDescription>,
    pub value_column: String,
    pub group_column: String,
    pub boxes: Vec<BoxSummary>,
}
