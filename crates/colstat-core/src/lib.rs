#![forbid(unsafe_code)]
//! colstat-core: shared kernel for the colstat column-set profiler.
//!
//! This crate contains only *pure* types and small helpers. There is **no
//! I/O**, **no async**, and **no search logic** here, by design — that lives
//! in `colstat-engine`, which depends on this crate.
//!
//! Crates that use this:
//! - colstat-engine: the combination-search engine (spaces, collectors, pass
//!   controller) built on top of `ColumnSet`, `Column`, and `Value`.
//! - colstat-cli: a thin CSV-driven front end that builds a schema of
//!   `Column`s and reports `ProfileError`s back to the operator.

pub mod column;
pub mod columnset;
pub mod error;
pub mod value;

pub use column::Column;
pub use columnset::ColumnSet;
pub use error::{Error, Result};
pub use value::Value;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
