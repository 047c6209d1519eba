//! CLI library components for the passenger table cleaner.

pub mod logging;
pub mod pipeline;
