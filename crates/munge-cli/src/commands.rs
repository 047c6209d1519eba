use anyhow::Result;
use munge_report::{box_summary, category_counts, describe, missing_counts, preview};
use tracing::{info, info_span};

use munge_cli::pipeline::{OptionOverrides, clean, ingest, output, resolve_options};

use crate::cli::{CleanArgs, InspectArgs};
use crate::types::{CleanResult, InspectResult};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Resolve options (config file, then command-line overrides)
    // =========================================================================
    let overrides = OptionOverrides {
        strategy: args.strategy.map(Into::into),
        drop: args.drop.clone(),
        max_missing_ratio: args.max_missing_ratio,
    };
    let options = resolve_options(args.config.as_deref(), &overrides)?;
    let raw_column = options.salutation.raw_column.clone();
    let grouped_column = options.salutation.grouped_column.clone();

    // =========================================================================
    // Stage 2: Ingest and clean
    // =========================================================================
    let df = ingest(&args.input)?;
    let mut outcome = clean(&df, options)?;

    // =========================================================================
    // Stage 3: Summaries and output
    // =========================================================================
    let salutations = category_counts(&outcome.frame, &raw_column)?;
    let groups = category_counts(&outcome.frame, &grouped_column)?;
    let preview = preview(&outcome.frame, args.head)?;
    let output = match &args.output {
        Some(path) => Some(output(&mut outcome.frame, path)?),
        None => None,
    };

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        outcome,
        salutations,
        groups,
        preview,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();

    let options = resolve_options(args.config.as_deref(), &OptionOverrides::default())?;
    let df = ingest(&args.input)?;

    let value_column = args
        .column
        .clone()
        .unwrap_or_else(|| options.columns.fare.clone());
    let group_column = args
        .by
        .clone()
        .unwrap_or_else(|| options.columns.class.clone());
    let id_column = options.columns.id.as_str();
    let id = df.column(id_column).is_ok().then_some(id_column);

    let boxes = box_summary(&df, &value_column, &group_column, id)?;
    let outliers: usize = boxes.iter().map(|summary| summary.outliers.len()).sum();
    info!(
        value = %value_column,
        group = %group_column,
        groups = boxes.len(),
        outliers,
        "box summary complete"
    );

    Ok(InspectResult {
        input: args.input.clone(),
        rows: df.height(),
        columns: df.width(),
        missing: missing_counts(&df),
        describe: describe(&df)?,
        value_column,
        group_column,
        boxes,
    })
}
