//! Run configuration (§6), gathered into one value the way the reference
//! workspace gathers its own tunables into a single `EngineConfig` passed by
//! value into a run, rather than scattering flags across call sites.

use colstat_core::error::{Error, Result};

use crate::expected::f as expected_f;
use crate::space::Space;

pub const DEFAULT_COMBINATIONS_PER_PASS: usize = 100;
pub const DEFAULT_INTERESTING_SURPRISE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_COMPOSITE_SKETCH_THRESHOLD: usize = 250_000;
pub const DEFAULT_VALUE_LIST_CAP: usize = 20;

/// `(parentSpace, extendingColumn) -> accept?` — total and deterministic,
/// per §4.F.
pub type InterestPredicate = Box<dyn Fn(&Space, usize) -> bool + Send + Sync>;

pub struct ProfilerConfig {
    pub combinations_per_pass: usize,
    pub interest_predicate: InterestPredicate,
    pub interesting_surprise_threshold: f64,
    pub composite_sketch_threshold: usize,
    pub value_list_cap: usize,
}

impl ProfilerConfig {
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Whether a finalized space is "interesting" enough to register a
    /// `Distribution` for (§4.F step 7): every singleton/empty space
    /// qualifies unconditionally, larger ones only if their surprise clears
    /// the configured threshold.
    pub fn is_interesting(&self, space: &Space) -> bool {
        space.columns.cardinality() < 2 || space.surprise() > self.interesting_surprise_threshold
    }
}

impl std::fmt::Debug for ProfilerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilerConfig")
            .field("combinations_per_pass", &self.combinations_per_pass)
            .field("interesting_surprise_threshold", &self.interesting_surprise_threshold)
            .field("composite_sketch_threshold", &self.composite_sketch_threshold)
            .field("value_list_cap", &self.value_list_cap)
            .field("interest_predicate", &"<fn>")
            .finish()
    }
}

pub struct ProfilerConfigBuilder {
    combinations_per_pass: usize,
    interest_predicate: Option<InterestPredicate>,
    interesting_surprise_threshold: f64,
    composite_sketch_threshold: usize,
    value_list_cap: usize,
}

impl Default for ProfilerConfigBuilder {
    fn default() -> Self {
        Self {
            combinations_per_pass: DEFAULT_COMBINATIONS_PER_PASS,
            interest_predicate: None,
            interesting_surprise_threshold: DEFAULT_INTERESTING_SURPRISE_THRESHOLD,
            composite_sketch_threshold: DEFAULT_COMPOSITE_SKETCH_THRESHOLD,
            value_list_cap: DEFAULT_VALUE_LIST_CAP,
        }
    }
}

impl ProfilerConfigBuilder {
    pub fn combinations_per_pass(mut self, n: usize) -> Self {
        self.combinations_per_pass = n;
        self
    }

    pub fn interest_predicate(mut self, predicate: InterestPredicate) -> Self {
        self.interest_predicate = Some(predicate);
        self
    }

    pub fn interesting_surprise_threshold(mut self, threshold: f64) -> Self {
        self.interesting_surprise_threshold = threshold;
        self
    }

    pub fn composite_sketch_threshold(mut self, n: usize) -> Self {
        self.composite_sketch_threshold = n;
        self
    }

    pub fn value_list_cap(mut self, n: usize) -> Self {
        self.value_list_cap = n;
        self
    }

    pub fn build(self) -> Result<ProfilerConfig> {
        if self.combinations_per_pass <= 2 {
            return Err(Error::misuse(
                "combinationsPerPass must be greater than 2",
            ));
        }
        // §6: the interest predicate defaults to "always accept"; the
        // surprise-threshold predicate is available via
        // `canonical_interest_predicate` for callers who want it.
        let predicate = self.interest_predicate.unwrap_or_else(always_interested);
        Ok(ProfilerConfig {
            combinations_per_pass: self.combinations_per_pass,
            interest_predicate: predicate,
            interesting_surprise_threshold: self.interesting_surprise_threshold,
            composite_sketch_threshold: self.composite_sketch_threshold,
            value_list_cap: self.value_list_cap,
        })
    }
}

/// The canonical default predicate described in §4.F: accept when the
/// parent's surprise exceeds the threshold, or when the parent has no
/// distribution yet (approximated here as "the parent is the empty space").
pub fn canonical_interest_predicate(threshold: f64) -> InterestPredicate {
    Box::new(move |parent: &Space, _extending_column: usize| {
        parent.columns.is_empty() || parent.surprise() > threshold
    })
}

/// `interestPredicate` that accepts everything — the §6 default.
pub fn always_interested() -> InterestPredicate {
    Box::new(|_parent, _extending_column| true)
}

/// `interestPredicate` that accepts nothing — used by the §8 scenario 6
/// "everything uninteresting" test.
pub fn never_interested() -> InterestPredicate {
    Box::new(|_parent, _extending_column| false)
}

// Re-exported so callers building a custom predicate can reuse the same
// attenuation the expected-cardinality model uses, without reaching into
// `crate::expected` directly.
pub use expected_f as expected_cardinality_term;
