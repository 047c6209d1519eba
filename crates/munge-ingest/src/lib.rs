//! Loading and saving the passenger table.
//!
//! The loader reads one delimited file into a polars `DataFrame`. Empty fields
//! and the usual `NA`-style markers become nulls, which is the only
//! missing-value representation used downstream.

pub mod csv;
pub mod error;
pub mod values;

pub use csv::{
    MAX_CSV_FILE_SIZE, MISSING_MARKERS, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_dataframe_shape, validate_encoding, write_csv_table,
};
pub use error::{IngestError, Result};
pub use values::any_to_string;
