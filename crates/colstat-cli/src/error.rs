//! Thin `CliError`, layered on top of `colstat_core::Error` the way the
//! reference workspace's I/O and CLI crates layer their own `thiserror`
//! enums over the engine's core error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("profiler error: {0}")]
    Profile(#[from] colstat_core::Error),
}
