//! Read-only summaries of a table.
//!
//! Nothing in this crate modifies its input. The box summary flags values
//! outside the Tukey fences for a human to review; deciding what to do with
//! them is left to the reader.

pub mod boxplot;
pub mod describe;
pub mod distribution;
pub mod missing;
pub mod preview;

pub use boxplot::{BoxSummary, Outlier, box_summary};
pub use describe::{ColumnDescription, describe};
pub use distribution::{CategoryCount, category_counts};
pub use missing::{MissingCount, missing_counts};
pub use preview::{MISSING_MARKER, Preview, preview};
