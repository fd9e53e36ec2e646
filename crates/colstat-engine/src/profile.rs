//! Output assembly (§4.F step "Output assembly (G)", §3).
//!
//! `Profile` is the only thing a finished run hands back to the caller: row
//! count, one `Distribution` per minimal interesting column set, the known
//! `Unique` keys, and the functional dependencies discovered along the way.

use colstat_core::ColumnSet;
use serde::Serialize;

use crate::space::NullCount;

#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    pub columns: Vec<usize>,
    pub value_set: Option<Vec<String>>,
    pub cardinality: u64,
    pub null_count: Option<u64>,
    pub expected_cardinality: f64,
    pub minimal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Unique {
    pub columns: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionalDependency {
    pub determinant: Vec<usize>,
    pub dependent: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub row_count: u64,
    pub distributions: Vec<Distribution>,
    pub uniques: Vec<Unique>,
    pub functional_dependencies: Vec<FunctionalDependency>,
}

impl Distribution {
    pub(crate) fn from_space(columns: ColumnSet, space: &crate::space::Space) -> Self {
        Distribution {
            columns: columns.members().collect(),
            value_set: space
                .value_set
                .as_ref()
                .map(|vs| vs.iter().map(display_value).collect()),
            cardinality: space.cardinality,
            null_count: match space.null_count {
                NullCount::Count(n) => Some(n),
                NullCount::NotApplicable => None,
            },
            expected_cardinality: space.expected_cardinality,
            minimal: true,
        }
    }
}

fn display_value(v: &colstat_core::Value) -> String {
    use colstat_core::Value::*;
    match v {
        Null => "NULL".to_string(),
        Bool(b) => b.to_string(),
        I64(i) => i.to_string(),
        U64(u) => u.to_string(),
        F64(f) => f.to_string(),
        Str(s) => s.clone(),
        Bytes(b) => format!("{b:02x?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_to_json() {
        let p = Profile {
            row_count: 4,
            distributions: vec![Distribution {
                columns: vec![0],
                value_set: Some(vec!["10".into()]),
                cardinality: 1,
                null_count: Some(0),
                expected_cardinality: 4.0,
                minimal: true,
            }],
            uniques: vec![Unique { columns: vec![0] }],
            functional_dependencies: vec![],
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"row_count\":4"));
    }
}
