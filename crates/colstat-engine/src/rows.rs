//! The restartable row source the pass controller scans once per pass.
//!
//! The profiler makes no attempt to cache rows itself (§9): if the
//! underlying source is inherently single-shot, the caller buffers or
//! re-executes the query. `InMemoryRows` is the trivial restartable source
//! used by the CLI front end and by the tests.

use colstat_core::Value;

pub type RowResult = std::result::Result<Vec<Value>, Box<dyn std::error::Error + Send + Sync>>;

/// A finite, restartable sequence of rows.
///
/// `rows()` must yield the same sequence, in the same order, every time it
/// is called — the pass controller relies on this to keep `rowCount` (and
/// every cardinality derived from it) stable across passes.
pub trait RowSource {
    fn rows(&self) -> Box<dyn Iterator<Item = RowResult> + '_>;
}

/// A row source backed by an in-memory buffer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRows {
    rows: Vec<Vec<Value>>,
}

impl InMemoryRows {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self { rows }
    }
}

impl RowSource for InMemoryRows {
    fn rows(&self) -> Box<dyn Iterator<Item = RowResult> + '_> {
        Box::new(self.rows.iter().map(|r| Ok(r.clone())))
    }
}

impl FromIterator<Vec<Value>> for InMemoryRows {
    fn from_iter<T: IntoIterator<Item = Vec<Value>>>(iter: T) -> Self {
        InMemoryRows::new(iter.into_iter().collect())
    }
}
