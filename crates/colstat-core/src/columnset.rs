//! Immutable bit-set over column ordinals.
//!
//! Backed by a single `u64`: up to 64 columns, the practical ceiling for a
//! combinatorial search over column subsets. Equality and hashing are by the
//! raw bits, so a `ColumnSet` is `Copy` and cheap to use as a map key.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnSet(u64);

impl ColumnSet {
    pub const MAX_COLUMNS: usize = u64::BITS as usize;

    pub const fn empty() -> Self {
        ColumnSet(0)
    }

    pub fn singleton(ordinal: usize) -> Self {
        let mut s = ColumnSet::empty();
        s.set(ordinal);
        s
    }

    pub fn from_ordinals(ordinals: impl IntoIterator<Item = usize>) -> Self {
        let mut s = ColumnSet::empty();
        for o in ordinals {
            s.set(o);
        }
        s
    }

    pub fn cardinality(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        debug_assert!(ordinal < Self::MAX_COLUMNS);
        (self.0 >> ordinal) & 1 == 1
    }

    pub fn set(&mut self, ordinal: usize) {
        debug_assert!(ordinal < Self::MAX_COLUMNS);
        self.0 |= 1 << ordinal;
    }

    pub fn clear(&mut self, ordinal: usize) {
        debug_assert!(ordinal < Self::MAX_COLUMNS);
        self.0 &= !(1 << ordinal);
    }

    /// `self` with `ordinal` added, leaving `self` unchanged.
    pub fn with(&self, ordinal: usize) -> Self {
        let mut s = *self;
        s.set(ordinal);
        s
    }

    /// `self` with `ordinal` removed, leaving `self` unchanged.
    pub fn without(&self, ordinal: usize) -> Self {
        let mut s = *self;
        s.clear(ordinal);
        s
    }

    /// True iff `self` is a subset of `other` (reflexive: `self == other` counts).
    pub fn is_subset_of(&self, other: &ColumnSet) -> bool {
        self.0 & other.0 == self.0
    }

    /// True iff `self` is a strict subset of `other`.
    pub fn is_strict_subset_of(&self, other: &ColumnSet) -> bool {
        self.is_subset_of(other) && self != other
    }

    /// Elements in `self` but not in `other`.
    pub fn difference(&self, other: &ColumnSet) -> ColumnSet {
        ColumnSet(self.0 & !other.0)
    }

    pub fn union(&self, other: &ColumnSet) -> ColumnSet {
        ColumnSet(self.0 | other.0)
    }

    /// Members in ascending ordinal order.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::MAX_COLUMNS).filter(move |&i| self.contains(i))
    }

    /// Every subset of `{0, .., n_columns - 1}`, in ascending cardinality
    /// order then ascending bit pattern — the empty set first.
    ///
    /// Used by the pass controller's initialization (§4.F) when
    /// `2^n_columns < combinationsPerPass`.
    pub fn power_set(n_columns: usize) -> Vec<ColumnSet> {
        debug_assert!(n_columns <= Self::MAX_COLUMNS);
        let total: u64 = if n_columns == Self::MAX_COLUMNS {
            u64::MAX
        } else {
            (1u64 << n_columns) - 1
        };
        let mut sets: Vec<ColumnSet> = (0..=total).map(ColumnSet).collect();
        sets.sort_by_key(|s| (s.cardinality(), s.0));
        sets
    }
}

impl fmt::Debug for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnSet{:?}", self.members().collect::<Vec<_>>())
    }
}
