//! Library half of `colstat-cli`: the CSV loader and CLI error type, split
//! out of the binary so the top-level black-box tests can drive the same
//! code the `colstat` binary runs, without shelling out to a subprocess.

pub mod csv_source;
pub mod error;

pub use csv_source::{load, CsvSource};
pub use error::{CliError, Result};
