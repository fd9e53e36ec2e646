//! Scenario 6 from the spec's testable-properties section: an
//! "everything uninteresting" predicate caps the search at singleton
//! columns, on the same EMP/DEPT join used by the functional-dependency
//! scenarios.

mod support;

use colstat_engine::ProfilerConfig;
use support::{emp_dept_columns, emp_dept_in_memory};

#[test]
fn never_interested_predicate_only_yields_singletons_and_the_empty_set() {
    let columns = emp_dept_columns();
    let source = emp_dept_in_memory();
    let config = ProfilerConfig::builder()
        .combinations_per_pass(10)
        .interest_predicate(colstat_engine::config::never_interested())
        .build()
        .unwrap();

    let profile = colstat_engine::profile(&source, &columns, &config).unwrap();

    assert_eq!(profile.row_count, 14);
    assert!(
        profile.distributions.iter().all(|d| d.columns.len() <= 1),
        "found a composite distribution: {:?}",
        profile
            .distributions
            .iter()
            .filter(|d| d.columns.len() > 1)
            .map(|d| &d.columns)
            .collect::<Vec<_>>()
    );
    assert!(
        profile.distributions.iter().any(|d| d.columns.is_empty()),
        "the empty-column distribution should still be present"
    );
    assert!(
        profile.distributions.iter().any(|d| d.columns.len() == 1),
        "at least one singleton distribution should be present"
    );

    assert!(
        profile
            .functional_dependencies
            .iter()
            .all(|fd| fd.determinant.len() <= 1),
        "a functional dependency has a composite determinant, which requires a composite space"
    );
}
