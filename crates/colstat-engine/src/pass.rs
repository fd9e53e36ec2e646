//! The pass controller (§4.F) — the heart of the engine.
//!
//! Drives the multi-pass scan: maintains the `frontier` FIFO and the `done`
//! priority queue, decides which successor combinations to enqueue, derives
//! functional-dependency and minimality facts from the partial-order index,
//! and assembles the final `Profile` once both queues drain.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use colstat_core::error::{Error, Result};
use colstat_core::{Column, ColumnSet};

use crate::collector::Collector;
use crate::config::ProfilerConfig;
use crate::expected::expected_cardinality;
use crate::partial_order::PartialOrderIndex;
use crate::profile::{Distribution, FunctionalDependency, Profile, Unique};
use crate::rows::RowSource;
use crate::space::{NullCount, Space, SpaceHandle};

/// Priority-queue ordering for the `done` queue: `(|S| asc, surprise asc)`
/// — the empty set first, then singletons, then larger combinations; within
/// a size, less-surprising (less promising) spaces are expanded first. See
/// §9 for the status of this as an explicit, swappable comparator rather
/// than a reliance on object identity.
#[derive(Clone, Copy, PartialEq)]
struct DoneKey {
    size: usize,
    surprise: f64,
}

impl Eq for DoneKey {}

impl PartialOrd for DoneKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DoneKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.surprise.total_cmp(&other.surprise))
    }
}

pub struct PassController<'a> {
    config: &'a ProfilerConfig,
    n_columns: usize,

    frontier: VecDeque<ColumnSet>,
    seen: HashSet<ColumnSet>,
    done: BinaryHeap<Reverse<(DoneKey, SpaceHandle)>>,
    keys: Vec<ColumnSet>,
    results: PartialOrderIndex,
    distributions: HashMap<ColumnSet, Distribution>,
    uniques: Vec<ColumnSet>,
    singletons: Vec<Option<SpaceHandle>>,

    row_count: u64,
    pass_index: usize,
}

impl<'a> PassController<'a> {
    pub fn new(n_columns: usize, config: &'a ProfilerConfig) -> Self {
        let mut frontier = VecDeque::new();
        let mut seen = HashSet::new();

        // §4.F initialization: the whole power set if it fits in one pass,
        // otherwise just the root (empty) combination.
        let pass_size = config.combinations_per_pass as u64;
        let full_power_set_fits =
            n_columns < u64::BITS as usize && (1u64 << n_columns) < pass_size;
        if full_power_set_fits {
            for cs in ColumnSet::power_set(n_columns) {
                seen.insert(cs);
                frontier.push_back(cs);
            }
        } else {
            seen.insert(ColumnSet::empty());
            frontier.push_back(ColumnSet::empty());
        }

        Self {
            config,
            n_columns,
            frontier,
            seen,
            done: BinaryHeap::new(),
            keys: Vec::new(),
            results: PartialOrderIndex::new(),
            distributions: HashMap::new(),
            uniques: Vec::new(),
            singletons: vec![None; n_columns],
            row_count: 0,
            pass_index: 0,
        }
    }

    /// Run the full multi-pass search to completion and assemble the `Profile`.
    pub fn run(mut self, rows: &dyn RowSource, columns: &[Column]) -> Result<Profile> {
        loop {
            let batch = self.next_batch();
            if batch.is_empty() {
                break;
            }
            self.run_pass(&batch, rows, columns)?;
            tracing::trace!(
                pass = self.pass_index,
                batch_size = batch.len(),
                distributions = self.distributions.len(),
                "completed profiler pass"
            );
            self.pass_index += 1;
        }
        Ok(self.assemble())
    }

    /// §4.F "Batch selection (nextBatch, bounded by P)".
    fn next_batch(&mut self) -> Vec<ColumnSet> {
        let cap = self.config.combinations_per_pass;
        let mut batch = Vec::new();

        loop {
            if batch.len() >= cap {
                break;
            }
            if let Some(cs) = self.frontier.pop_front() {
                batch.push(cs);
                continue;
            }

            let Some(Reverse((_, handle))) = self.done.pop() else {
                break;
            };
            self.expand_successors(handle);
        }
        batch
    }

    fn expand_successors(&mut self, handle: SpaceHandle) {
        let parent_columns = self.results.get(handle).columns;
        for c in 0..self.n_columns {
            if parent_columns.contains(c) {
                continue;
            }
            let candidate = parent_columns.with(c);

            // Invariant: no strict superset of a known key is ever enqueued.
            // The empty key (only ever recorded when rowCount <= 1, per §8's
            // scenario 2 convention) is excluded here: it is a subset of
            // every candidate and would otherwise prune the whole search.
            if self
                .keys
                .iter()
                .any(|k| !k.is_empty() && k.is_subset_of(&candidate))
            {
                continue;
            }

            // The empty root always expands into its singleton children: the
            // predicate governs how far the search goes *past* the columns
            // themselves, not whether the baseline per-column statistics get
            // collected at all (§8 scenario 6 needs every singleton present
            // even under an always-false predicate).
            if !parent_columns.is_empty() {
                let parent_space = self.results.get(handle);
                if !(self.config.interest_predicate)(parent_space, c) {
                    continue;
                }
            }

            if self.seen.contains(&candidate) {
                continue;
            }
            self.seen.insert(candidate);
            self.frontier.push_back(candidate);
        }
    }

    /// Scan the rows once, feeding every `Space` in the batch, then finalize,
    /// derive FDs/minimality, and classify each.
    fn run_pass(&mut self, batch: &[ColumnSet], rows: &dyn RowSource, columns: &[Column]) -> Result<()> {
        let n = columns.len();
        let mut collectors: Vec<Collector> = batch
            .iter()
            .map(|cs| {
                if cs.cardinality() == 1 {
                    Collector::singleton()
                } else {
                    Collector::composite(self.config.composite_sketch_threshold)
                }
            })
            .collect();

        let mut scratch: Vec<colstat_core::Value> = Vec::new();
        let mut row_count = 0u64;
        for (row_index, row) in rows.rows().enumerate() {
            let row = row.map_err(Error::iteration)?;
            if row.len() != n {
                return Err(Error::row_shape(row_index, self.pass_index, n, row.len()));
            }
            for (cs, collector) in batch.iter().zip(collectors.iter_mut()) {
                scratch.clear();
                scratch.extend(cs.members().map(|i| row[i].clone()));
                collector.observe(&scratch);
            }
            row_count += 1;
        }
        self.row_count = row_count;

        for (cs, collector) in batch.iter().copied().zip(collectors.into_iter()) {
            self.finalize_space(cs, collector);
        }
        Ok(())
    }

    fn finalize_space(&mut self, columns: ColumnSet, collector: Collector) {
        let finalized = collector.finalize(self.config.value_list_cap);
        let null_count = match finalized.null_count {
            Some(n) => NullCount::Count(n),
            None => NullCount::NotApplicable,
        };
        let mut space = Space::new(columns, finalized.cardinality, null_count, finalized.value_set);

        // A run with zero rows never produces a unique key (§8 boundary
        // behaviors): require row_count > 0 rather than let `0 == 0` fire
        // for the empty combination. When rowCount == 1 every column is
        // trivially unique; only the empty combination is reported as such,
        // matching §8 scenario 2's convention (`Unique([])`, nothing else).
        let is_unique_now = self.row_count > 0
            && space.cardinality == self.row_count
            && (self.row_count != 1 || columns.is_empty());

        // As in `expand_successors`, the empty key (rowCount <= 1) is excluded
        // from this check or every later Space would be marked non-minimal.
        let known_key_subset = self
            .keys
            .iter()
            .any(|k| !k.is_empty() && k.is_subset_of(&columns));

        let non_minimal = self.derive_dependencies(&mut space);

        space.expected_cardinality = expected_cardinality(columns, self.row_count, |sub| {
            self.results.find(&sub).map(|h| self.results.get(h).cardinality)
        });
        space.unique = is_unique_now;

        let minimal = non_minimal == 0 && !is_unique_now && !known_key_subset;
        let interesting = self.config.is_interesting(&space);

        let handle = self.results.add(space);
        if columns.cardinality() == 1 {
            let ordinal = columns.members().next().expect("singleton has one member");
            self.singletons[ordinal] = Some(handle);
        }

        if minimal && interesting {
            let space_ref = self.results.get(handle);
            self.distributions
                .insert(columns, Distribution::from_space(columns, space_ref));
            self.done.push(Reverse((
                DoneKey {
                    size: columns.cardinality(),
                    surprise: space_ref.surprise(),
                },
                handle,
            )));
        }

        if is_unique_now {
            self.keys.push(columns);
            self.uniques.push(columns);
        }
    }

    /// §4.F step 5: for every strict descendant with equal cardinality,
    /// every column in `S \ S'` is functionally determined by `S'`. Returns
    /// the number of non-minimal FD candidates rejected.
    fn derive_dependencies(&mut self, space: &mut Space) -> usize {
        let columns = space.columns;
        let mut non_minimal = 0usize;

        let descendants: Vec<SpaceHandle> = self
            .results
            .strict_descendants(&columns)
            .filter(|&h| self.results.get(h).cardinality == space.cardinality)
            .collect();

        for handle in descendants {
            let determinant = self.results.get(handle).columns;
            let determined = columns.difference(&determinant);
            for d in determined.members() {
                // Two columns that are each already independently unique
                // determine each other trivially — that's a restatement of
                // both Uniques, not a new fact, so it's dropped rather than
                // reported as an FD (§8 scenarios 3-4).
                if let Some(target_handle) = self.singletons[d] {
                    if self.results.get(target_handle).unique {
                        continue;
                    }
                }
                if self.is_minimal_fd(determinant, d) {
                    if let Some(singleton_handle) = self.singletons[d] {
                        self.results
                            .get_mut(singleton_handle)
                            .dependents
                            .get_or_insert_with(Vec::new)
                            .push(determinant);
                    }
                    space.dependencies.set(d);
                } else {
                    non_minimal += 1;
                }
            }
        }
        non_minimal
    }

    /// §4.F step 5's minimality check for the candidate FD `determinant -> target`.
    fn is_minimal_fd(&self, determinant: ColumnSet, target: usize) -> bool {
        for i in determinant.members() {
            if let Some(h) = self.singletons[i] {
                if let Some(deps) = &self.results.get(h).dependents {
                    let without_i = determinant.without(i);
                    if deps.iter().any(|x| x.is_subset_of(&without_i)) {
                        return false;
                    }
                }
            }
        }
        if let Some(h) = self.singletons[target] {
            if let Some(deps) = &self.results.get(h).dependents {
                if deps.iter().any(|y| y.is_subset_of(&determinant)) {
                    return false;
                }
            }
        }
        true
    }

    fn assemble(self) -> Profile {
        let mut distributions: Vec<Distribution> = self.distributions.into_values().collect();
        distributions.sort_by(|a, b| a.columns.cmp(&b.columns));

        let mut uniques: Vec<Unique> = self
            .uniques
            .into_iter()
            .map(|cs| Unique {
                columns: cs.members().collect(),
            })
            .collect();
        uniques.sort_by(|a, b| a.columns.cmp(&b.columns));

        let mut fds = Vec::new();
        for (ordinal, handle) in self.singletons.iter().enumerate() {
            let Some(handle) = handle else { continue };
            let space = self.results.get(*handle);
            if let Some(deps) = &space.dependents {
                for determinant in deps {
                    fds.push(FunctionalDependency {
                        determinant: determinant.members().collect(),
                        dependent: ordinal,
                    });
                }
            }
        }
        fds.sort_by(|a, b| (&a.determinant, a.dependent).cmp(&(&b.determinant, b.dependent)));

        Profile {
            row_count: self.row_count,
            distributions,
            uniques,
            functional_dependencies: fds,
        }
    }
}
