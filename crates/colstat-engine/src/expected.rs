//! The expected-cardinality model (§4.E): predicts the cardinality of a
//! combination from the cardinalities of its proper sub-combinations, under
//! an independence assumption. Drives `surprise` and therefore the pass
//! controller's pruning.

use colstat_core::ColumnSet;

/// Urn-style attenuation of the combined domain size `a * b` into the
/// range `[0, row_count]`. Satisfies `f(r,a,r) = r`, `f(r,a,1) = a`,
/// monotone non-decreasing in `a` and `b`, and `f(r,a,b) <= min(r, a*b)`.
///
/// The exponent `a * b` can be large for wide composite sets, so the whole
/// computation stays in `f64` and the result is clamped before being handed
/// back as a cardinality estimate — guards against floating-point drift
/// producing a negative or over-large expectation.
pub fn f(row_count: u64, a: u64, b: u64) -> f64 {
    if row_count == 0 {
        return 0.0;
    }
    let r = row_count as f64;
    let exponent = a as f64 * b as f64;
    let value = r * (1.0 - (1.0 - 1.0 / r).powf(exponent));
    value.clamp(0.0, r)
}

/// Predict the cardinality of `columns` from the cardinalities of its
/// immediate `|S|-1` sub-combinations, via `cardinality_of`.
///
/// - `|S| = 0` → 1.
/// - `|S| = 1` → `row_count`.
/// - `|S| >= 2` → the minimum, over columns `i` in `S`, of
///   `f(row_count, c({i}), c(S \ {i}))`, skipping terms whose sub-cardinality
///   is not yet known; if none are known, falls back to `row_count`.
pub fn expected_cardinality(
    columns: ColumnSet,
    row_count: u64,
    cardinality_of: impl Fn(ColumnSet) -> Option<u64>,
) -> f64 {
    match columns.cardinality() {
        0 => 1.0,
        1 => row_count as f64,
        _ => {
            let mut best: Option<f64> = None;
            for i in columns.members() {
                let a = cardinality_of(ColumnSet::singleton(i));
                let b = cardinality_of(columns.without(i));
                if let (Some(a), Some(b)) = (a, b) {
                    let term = f(row_count, a, b);
                    best = Some(match best {
                        Some(current) => current.min(term),
                        None => term,
                    });
                }
            }
            best.unwrap_or(row_count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_saturates_to_row_count_when_b_equals_row_count() {
        assert_eq!(f(100, 7, 100), 100.0);
    }

    #[test]
    fn f_reduces_to_a_when_b_is_one() {
        let v = f(100, 42, 1);
        assert!((v - 42.0).abs() < 1e-9);
    }

    #[test]
    fn f_is_bounded_by_row_count_and_product() {
        let v = f(10, 5, 5);
        assert!(v <= 10.0);
        assert!(v <= 25.0);
    }

    #[test]
    fn f_is_zero_when_row_count_is_zero() {
        assert_eq!(f(0, 3, 4), 0.0);
    }

    #[test]
    fn expected_for_empty_set_is_one() {
        assert_eq!(expected_cardinality(ColumnSet::empty(), 50, |_| None), 1.0);
    }

    #[test]
    fn expected_for_singleton_is_row_count() {
        assert_eq!(
            expected_cardinality(ColumnSet::singleton(0), 50, |_| None),
            50.0
        );
    }

    #[test]
    fn expected_skips_unknown_terms_and_falls_back() {
        let cols = ColumnSet::from_ordinals([0, 1]);
        // Neither sub-cardinality known.
        assert_eq!(expected_cardinality(cols, 40, |_| None), 40.0);
    }

    #[test]
    fn expected_uses_minimum_over_columns() {
        let cols = ColumnSet::from_ordinals([0, 1]);
        let lookup = |cs: ColumnSet| -> Option<u64> {
            if cs == ColumnSet::singleton(0) {
                Some(2)
            } else if cs == ColumnSet::singleton(1) {
                Some(100)
            } else {
                None
            }
        };
        // i=0: a=c({0})=2, b=c({1})=100 -> f(r,2,100)
        // i=1: a=c({1})=100, b=c({0})=2 -> f(r,100,2), same product, same value
        let v = expected_cardinality(cols, 200, lookup);
        assert!(v > 0.0 && v <= 200.0);
    }
}
