#![forbid(unsafe_code)]
//! colstat-engine: the bounded-memory, pass-limited combinatorial search
//! over column subsets.
//!
//! `profile` is the one entry point: hand it a restartable [`RowSource`], the
//! table's [`Column`] schema, and a [`ProfilerConfig`], and it runs the
//! pass controller to completion and hands back a [`Profile`].

pub mod collector;
pub mod config;
pub mod expected;
pub mod partial_order;
mod pass;
pub mod profile;
pub mod rows;
pub mod sketch;
pub mod space;

pub use collector::Collector;
pub use config::{ProfilerConfig, ProfilerConfigBuilder};
pub use profile::{Distribution, FunctionalDependency, Profile, Unique};
pub use rows::{InMemoryRows, RowResult, RowSource};
pub use space::{NullCount, Space, SpaceHandle};

use colstat_core::error::{Error, Result};
use colstat_core::Column;

use pass::PassController;

/// Run the full combinatorial search over `columns` against `rows`.
///
/// `columns[i].ordinal` must equal `i` for every `i` (§6 precondition); any
/// other shape is a [`Error::Misuse`] caught before a single row is read.
pub fn profile(rows: &dyn RowSource, columns: &[Column], config: &ProfilerConfig) -> Result<Profile> {
    if let Some(bad) = colstat_core::column::find_ordinal_mismatch(columns) {
        return Err(Error::misuse(format!(
            "column at position {bad} has a mismatched ordinal"
        )));
    }
    if columns.len() > colstat_core::ColumnSet::MAX_COLUMNS {
        return Err(Error::misuse(format!(
            "schema has {} columns, more than the {} a ColumnSet can represent",
            columns.len(),
            colstat_core::ColumnSet::MAX_COLUMNS
        )));
    }

    let controller = PassController::new(columns.len(), config);
    controller.run(rows, columns)
}
