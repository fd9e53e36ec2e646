//! The run's arena of finalized `Space`s, ordered by subset inclusion (§4.D).
//!
//! Implemented as a flat `Vec<Space>` with an O(k) scan per `descendants`
//! call rather than an incrementally-maintained Hasse diagram: expected
//! profile sizes (hundreds to low thousands of spaces per run) make the
//! scan cheap, and a flat arena is one of the two implementations the
//! design notes explicitly sanction. Spaces never hold a back-reference to
//! this index or to the owning run — every lookup goes through here.

use std::collections::HashMap;

use colstat_core::ColumnSet;

use crate::space::{Space, SpaceHandle};

#[derive(Default)]
pub struct PartialOrderIndex {
    spaces: Vec<Space>,
    by_columns: HashMap<ColumnSet, SpaceHandle>,
}

impl PartialOrderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finalized space and return its handle. O(1): the Hasse
    /// relation is recovered lazily by `descendants`/`ancestors`, not
    /// maintained incrementally on insert.
    pub fn add(&mut self, space: Space) -> SpaceHandle {
        let handle = self.spaces.len();
        self.by_columns.insert(space.columns, handle);
        self.spaces.push(space);
        handle
    }

    pub fn get(&self, handle: SpaceHandle) -> &Space {
        &self.spaces[handle]
    }

    pub fn get_mut(&mut self, handle: SpaceHandle) -> &mut Space {
        &mut self.spaces[handle]
    }

    pub fn find(&self, columns: &ColumnSet) -> Option<SpaceHandle> {
        self.by_columns.get(columns).copied()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Every existing space whose `ColumnSet` is a **strict** subset of
    /// `columns`, i.e. irreflexive descendants under `s1 ≤ s2 iff s1.columns
    /// ⊆ s2.columns`.
    pub fn strict_descendants(&self, columns: &ColumnSet) -> impl Iterator<Item = SpaceHandle> + '_ {
        self.spaces
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.columns.is_strict_subset_of(columns))
            .map(|(h, _)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::NullCount;

    fn space(cols: &[usize]) -> Space {
        Space::new(ColumnSet::from_ordinals(cols.iter().copied()), 1, NullCount::NotApplicable, None)
    }

    #[test]
    fn add_then_find_roundtrips() {
        let mut idx = PartialOrderIndex::new();
        let h = idx.add(space(&[0, 1]));
        assert_eq!(idx.find(&ColumnSet::from_ordinals([0, 1])), Some(h));
        assert_eq!(idx.get(h).columns, ColumnSet::from_ordinals([0, 1]));
    }

    #[test]
    fn strict_descendants_excludes_self_and_supersets() {
        let mut idx = PartialOrderIndex::new();
        idx.add(space(&[0]));
        idx.add(space(&[1]));
        idx.add(space(&[0, 1]));
        idx.add(space(&[0, 1, 2]));

        let target = ColumnSet::from_ordinals([0, 1]);
        let desc: Vec<_> = idx.strict_descendants(&target).map(|h| idx.get(h).columns).collect();
        assert_eq!(desc.len(), 2);
        assert!(desc.contains(&ColumnSet::singleton(0)));
        assert!(desc.contains(&ColumnSet::singleton(1)));
        assert!(!desc.contains(&target));
    }
}
