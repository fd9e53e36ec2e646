//! Per-combination value collectors (§4.B).
//!
//! Modeled as a two-case sum type — singleton vs. composite — rather than a
//! trait object hierarchy, since the two cases differ only in whether the
//! observed unit is a scalar or a tuple and nothing is gained by dynamic
//! dispatch here.

use std::collections::BTreeSet;

use colstat_core::Value;

use crate::sketch::DistinctSketch;

/// The cardinality cap under which a singleton space keeps (and reports)
/// its exact sorted value list.
pub const DEFAULT_VALUE_LIST_CAP: usize = 20;

pub enum Collector {
    Singleton {
        values: BTreeSet<Value>,
        null_count: u64,
    },
    Composite {
        exact: Option<BTreeSet<Vec<Value>>>,
        sketch: Option<DistinctSketch>,
        sketch_threshold: usize,
        null_count: u64,
    },
}

/// What a finalized collector hands back to its `Space` (§4.B, §4.C).
pub struct Finalized {
    pub cardinality: u64,
    /// `None` for composite spaces — they do not report per-column nulls.
    pub null_count: Option<u64>,
    /// `Some` only for singleton spaces whose distinct-value count is below
    /// the configured value-list cap.
    pub value_set: Option<Vec<Value>>,
}

impl Collector {
    pub fn singleton() -> Self {
        Collector::Singleton {
            values: BTreeSet::new(),
            null_count: 0,
        }
    }

    pub fn composite(sketch_threshold: usize) -> Self {
        Collector::Composite {
            exact: Some(BTreeSet::new()),
            sketch: None,
            sketch_threshold,
            null_count: 0,
        }
    }

    /// Feed one row's projected values (already in ascending-ordinal order).
    pub fn observe(&mut self, values: &[Value]) {
        match self {
            Collector::Singleton { values: set, null_count } => {
                debug_assert_eq!(values.len(), 1);
                if values[0].is_null() {
                    *null_count += 1;
                } else {
                    set.insert(values[0].clone());
                }
            }
            Collector::Composite {
                exact,
                sketch,
                sketch_threshold,
                null_count,
            } => {
                // Any null component counts as one "null bucket" observation,
                // never a per-combination distinct tuple (§4.B, §9).
                if values.iter().any(Value::is_null) {
                    *null_count += 1;
                    return;
                }

                if let Some(set) = exact {
                    set.insert(values.to_vec());
                    if set.len() > *sketch_threshold {
                        let mut sk = DistinctSketch::new();
                        for tuple in set.iter() {
                            sk.observe_tuple(tuple);
                        }
                        *sketch = Some(sk);
                        *exact = None;
                    }
                } else if let Some(sk) = sketch {
                    sk.observe_tuple(values);
                }
            }
        }
    }

    pub fn finalize(self, value_list_cap: usize) -> Finalized {
        match self {
            Collector::Singleton { values, null_count } => {
                let cardinality = values.len() as u64 + u64::from(null_count > 0);
                let value_set = if values.len() < value_list_cap {
                    Some(values.into_iter().collect())
                } else {
                    None
                };
                Finalized {
                    cardinality,
                    null_count: Some(null_count),
                    value_set,
                }
            }
            Collector::Composite {
                exact,
                sketch,
                null_count,
                ..
            } => {
                let distinct = match (exact, sketch) {
                    (Some(set), None) => set.len() as u64,
                    (None, Some(sk)) => sk.estimate(),
                    _ => unreachable!("composite collector must hold exactly one accumulator"),
                };
                Finalized {
                    cardinality: distinct + u64::from(null_count > 0),
                    null_count: None,
                    value_set: None,
                }
            }
        }
    }
}
