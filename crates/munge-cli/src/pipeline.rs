//! Stage functions behind the `clean` and `inspect` commands.
//!
//! Each stage logs its own timing and wraps failures with the path or step
//! it was working on, so `main` only has to print the error chain.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use munge_ingest::{read_csv_table, write_csv_table};
use munge_model::{FillStrategy, MungeOptions, load_options};
use munge_transform::{MungeOutcome, MungePipeline};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub strategy: Option<FillStrategy>,
    /// Replaces the configured drop list when non-empty.
    pub drop: Vec<String>,
    pub max_missing_ratio: Option<f64>,
}

/// Load options from `config` (or defaults) and apply `overrides`.
pub fn resolve_options(config: Option<&Path>, overrides: &OptionOverrides) -> Result<MungeOptions> {
    let mut options = match config {
        Some(path) => {
            load_options(path).with_context(|| format!("load config {}", path.display()))?
        }
        None => MungeOptions::default(),
    };
    if let Some(strategy) = overrides.strategy {
        options = options.with_strategy(strategy);
    }
    if !overrides.drop.is_empty() {
        options = options.with_drop(overrides.drop.clone());
    }
    if overrides.max_missing_ratio.is_some() {
        options = options.with_max_missing_ratio(overrides.max_missing_ratio);
    }
    options.validate().context("validate options")?;
    debug!(
        strategy = %options.impute.strategy,
        drop = ?options.prune.drop,
        max_missing_ratio = ?options.prune.max_missing_ratio,
        "resolved options"
    );
    Ok(options)
}

/// Read the passenger table.
pub fn ingest(path: &Path) -> Result<DataFrame> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let df = read_csv_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(df)
}

/// Run the cleaning pipeline.
pub fn clean(df: &DataFrame, options: MungeOptions) -> Result<MungeOutcome> {
    let start = Instant::now();
    let outcome = MungePipeline::new(options)
        .run(df)
        .context("clean passenger table")?;
    info!(
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(outcome)
}

/// Write the cleaned table, returning the path written.
pub fn output(frame: &mut DataFrame, path: &Path) -> Result<PathBuf> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    write_csv_table(frame, path).with_context(|| format!("write {}", path.display()))?;
    info!(rows = frame.height(), "output complete");
    Ok(path.to_path_buf())
}
