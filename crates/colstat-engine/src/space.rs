//! `Space`: the finalized workspace for one `ColumnSet` (§3, §4.C).
//!
//! A `Space` is created exactly once, scanned during exactly one pass, and
//! then retained forever in the run's partial-order index. It never holds a
//! back-reference to the run — lookups (e.g. "what's the cardinality of my
//! sibling singleton?") go through the run's arena via a `SpaceHandle`, per
//! the explicit-arena re-architecture in the design notes.

use colstat_core::{ColumnSet, Value};

/// Index into the run's `PartialOrderIndex` arena. Not meaningful across runs.
pub type SpaceHandle = usize;

/// `nullCount` is only meaningful for singleton spaces; composite spaces
/// report a sentinel instead of a per-column count (§3, §4.B).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCount {
    Count(u64),
    NotApplicable,
}

impl NullCount {
    pub fn is_present(&self) -> bool {
        matches!(self, NullCount::Count(n) if *n > 0)
    }
}

#[derive(Debug, Clone)]
pub struct Space {
    pub columns: ColumnSet,
    pub cardinality: u64,
    pub null_count: NullCount,
    pub value_set: Option<Vec<Value>>,
    pub expected_cardinality: f64,
    pub unique: bool,
    pub dependencies: ColumnSet,
    /// Populated only for singleton spaces: the column sets known to
    /// functionally determine this space's sole column.
    pub dependents: Option<Vec<ColumnSet>>,
}

impl Space {
    /// A freshly-scanned space before minimality/FD/expected-cardinality
    /// derivation has run; those fields are filled in by the pass controller.
    pub fn new(columns: ColumnSet, cardinality: u64, null_count: NullCount, value_set: Option<Vec<Value>>) -> Self {
        let dependents = if columns.cardinality() == 1 {
            Some(Vec::new())
        } else {
            None
        };
        Self {
            columns,
            cardinality,
            null_count,
            value_set,
            expected_cardinality: 0.0,
            unique: false,
            dependencies: ColumnSet::empty(),
            dependents,
        }
    }

    /// `(expected − observed) / max(expected, observed)`; positive when the
    /// combination is more correlated than independence predicts (§4.E).
    pub fn surprise(&self) -> f64 {
        let expected = self.expected_cardinality;
        let observed = self.cardinality as f64;
        let denom = expected.max(observed);
        if denom > 0.0 {
            (expected - observed) / denom
        } else {
            0.0
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.columns.cardinality() == 1
    }

    pub fn sole_column(&self) -> Option<usize> {
        if self.is_singleton() {
            self.columns.members().next()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surprise_is_zero_when_both_zero() {
        let s = Space::new(ColumnSet::empty(), 0, NullCount::NotApplicable, None);
        assert_eq!(s.surprise(), 0.0);
    }

    #[test]
    fn surprise_is_positive_when_less_varied_than_expected() {
        let mut s = Space::new(ColumnSet::from_ordinals([0, 1]), 2, NullCount::NotApplicable, None);
        s.expected_cardinality = 10.0;
        assert!(s.surprise() > 0.0);
    }

    #[test]
    fn singleton_space_has_dependents_slot() {
        let s = Space::new(ColumnSet::singleton(0), 1, NullCount::Count(0), Some(vec![]));
        assert!(s.dependents.is_some());
        let composite = Space::new(ColumnSet::from_ordinals([0, 1]), 1, NullCount::NotApplicable, None);
        assert!(composite.dependents.is_none());
    }
}
