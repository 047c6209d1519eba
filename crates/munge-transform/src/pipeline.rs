//! The cleaning pipeline.
//!
//! Steps run in a fixed order, each consuming the previous table by reference
//! and producing a new one:
//!
//! 1. prune configured (and optionally sparse) columns
//! 2. extract the salutation from the name column
//! 3. collapse rare salutations into the fallback label
//! 4. impute the age column
//!
//! The row count is checked after every step.

use munge_model::{FillStrategy, MungeOptions};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use crate::data_utils::column_delta;
use crate::error::{Result, TransformError};
use crate::grouped::GroupedStatistic;
use crate::impute::{FillReport, fill_from_groups, fill_with_mean};
use crate::prune::{drop_columns, sparse_columns};
use crate::salutation::{SalutationGroups, collapse_salutations, extract_salutations};

/// Pipeline step identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Prune,
    ExtractSalutation,
    CollapseSalutation,
    Impute,
}

impl PipelineStep {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Prune => "prune",
            Self::ExtractSalutation => "extract salutation",
            Self::CollapseSalutation => "collapse salutation",
            Self::Impute => "impute",
        }
    }
}

/// Shape change produced by one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    pub step: PipelineStep,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_added: Vec<String>,
    pub columns_removed: Vec<String>,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct MungeOutcome {
    /// The cleaned table.
    pub frame: DataFrame,
    /// Lookup used for imputation; `None` for the mean strategy.
    pub statistic: Option<GroupedStatistic>,
    pub fill: FillReport,
    pub steps: Vec<StepSummary>,
}

/// Configured pipeline.
#[derive(Debug, Clone)]
pub struct MungePipeline {
    options: MungeOptions,
    groups: SalutationGroups,
}

impl MungePipeline {
    pub fn new(options: MungeOptions) -> Self {
        let groups = SalutationGroups::from_options(&options.salutation);
        Self { options, groups }
    }

    pub fn options(&self) -> &MungeOptions {
        &self.options
    }

    pub fn groups(&self) -> &SalutationGroups {
        &self.groups
    }

    /// Run every step on `df`.
    pub fn run(&self, df: &DataFrame) -> Result<MungeOutcome> {
        let span = info_span!("munge", rows = df.height(), columns = df.width());
        let _guard = span.enter();
        let mut steps = Vec::with_capacity(4);

        let pruned = self.prune(df)?;
        steps.push(summarize(PipelineStep::Prune, df, &pruned)?);

        let extracted = self.extract(&pruned)?;
        steps.push(summarize(
            PipelineStep::ExtractSalutation,
            &pruned,
            &extracted,
        )?);

        let collapsed = self.collapse(&extracted)?;
        steps.push(summarize(
            PipelineStep::CollapseSalutation,
            &extracted,
            &collapsed,
        )?);

        let (frame, statistic, fill) = self.impute(&collapsed)?;
        steps.push(summarize(PipelineStep::Impute, &collapsed, &frame)?);

        info!(
            rows = frame.height(),
            columns = frame.width(),
            filled = fill.filled,
            "pipeline complete"
        );
        Ok(MungeOutcome {
            frame,
            statistic,
            fill,
            steps,
        })
    }

    /// Drop the configured columns plus, when a ratio is set, every sparse
    /// column that no later step reads.
    pub fn prune(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut drop = self.options.prune.drop.clone();
        if let Some(ratio) = self.options.prune.max_missing_ratio {
            let protected = self.protected_columns();
            for name in sparse_columns(df, ratio) {
                if protected.contains(&name) {
                    warn!(column = %name, ratio, "sparse column kept because it is required");
                } else if !drop.contains(&name) {
                    drop.push(name);
                }
            }
        }
        let out = drop_columns(df, &drop)?;
        info!(dropped = ?drop, "pruned columns");
        Ok(out)
    }

    pub fn extract(&self, df: &DataFrame) -> Result<DataFrame> {
        extract_salutations(
            df,
            &self.options.columns.name,
            &self.options.salutation.raw_column,
        )
    }

    pub fn collapse(&self, df: &DataFrame) -> Result<DataFrame> {
        let out = collapse_salutations(
            df,
            &self.groups,
            &self.options.salutation.raw_column,
            &self.options.salutation.grouped_column,
        )?;
        info!(
            column = %self.options.salutation.grouped_column,
            kept = ?self.groups.kept().collect::<Vec<_>>(),
            fallback = self.groups.fallback(),
            "grouped salutations"
        );
        Ok(out)
    }

    /// Fill the age column with the configured strategy.
    pub fn impute(
        &self,
        df: &DataFrame,
    ) -> Result<(DataFrame, Option<GroupedStatistic>, FillReport)> {
        let target = &self.options.columns.age;
        match self.options.impute.strategy {
            FillStrategy::GroupedMedian => {
                let statistic =
                    GroupedStatistic::median(df, target, &self.options.impute.group_by)?;
                info!(
                    column = %target,
                    groups = statistic.len(),
                    "built grouped median"
                );
                let (out, report) = fill_from_groups(df, &statistic)?;
                Ok((out, Some(statistic), report))
            }
            FillStrategy::GlobalMean => {
                let (out, report) = fill_with_mean(df, target)?;
                Ok((out, None, report))
            }
        }
    }

    fn protected_columns(&self) -> Vec<String> {
        let columns = &self.options.columns;
        let mut protected = vec![
            columns.id.clone(),
            columns.name.clone(),
            columns.age.clone(),
            columns.class.clone(),
            columns.sex.clone(),
            columns.fare.clone(),
        ];
        protected.extend(self.options.impute.group_by.iter().cloned());
        protected
    }
}

fn summarize(step: PipelineStep, before: &DataFrame, after: &DataFrame) -> Result<StepSummary> {
    if before.height() != after.height() {
        return Err(TransformError::RowCountChanged {
            step: step.label(),
            before: before.height(),
            after: after.height(),
        });
    }
    let (columns_added, columns_removed) = column_delta(before, after);
    Ok(StepSummary {
        step,
        rows_in: before.height(),
        rows_out: after.height(),
        columns_added,
        columns_removed,
    })
}
