//! CLI argument definitions for the passenger table cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use munge_model::FillStrategy;

#[derive(Parser)]
#[command(
    name = "munge",
    version,
    about = "Clean the Titanic passenger table and impute missing ages",
    long_about = "Clean the Titanic passenger table.\n\n\
                  Drops sparse columns, derives a salutation from each name,\n\
                  and fills missing ages with the median age of passengers\n\
                  sharing the same salutation, class and sex."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the cleaning pipeline and print what changed.
    Clean(CleanArgs),

    /// Print descriptive summaries without changing anything.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Passenger CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// TOML file with pipeline options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the cleaned table to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Imputation strategy (overrides the config file).
    #[arg(long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Column to drop; repeat for several. Replaces the configured list.
    #[arg(long = "drop", value_name = "COLUMN")]
    pub drop: Vec<String>,

    /// Also drop columns with a larger share of missing cells.
    #[arg(long = "max-missing-ratio", value_name = "RATIO")]
    pub max_missing_ratio: Option<f64>,

    /// Number of cleaned rows to print.
    #[arg(long = "head", default_value_t = 10)]
    pub head: usize,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Passenger CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// TOML file with pipeline options (column names).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Numeric column to summarize per group (default: fare column).
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: Option<String>,

    /// Categorical column to group by (default: class column).
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    GroupedMedian,
    Mean,
}

impl From<StrategyArg> for FillStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::GroupedMedian => FillStrategy::GroupedMedian,
            StrategyArg::Mean => FillStrategy::GlobalMean,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
