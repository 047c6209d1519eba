//! Shared model types for the passenger table cleaning pipeline.
//!
//! - **columns**: names of the columns each pipeline step reads
//! - **key**: composite categorical keys used by grouped statistics
//! - **options**: TOML-backed pipeline configuration

pub mod columns;
pub mod error;
pub mod key;
pub mod options;

pub use columns::ColumnRoles;
pub use error::{ConfigError, Result};
pub use key::GroupKey;
pub use options::{
    FillStrategy, ImputeOptions, MungeOptions, PruneOptions, SalutationOptions, load_options,
};
