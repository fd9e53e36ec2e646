//! The opaque, totally-ordered value a row contributes per column.
//!
//! Modeled as a small closed enum rather than a trait object: collectors,
//! ordering, and hashing all stay on the stack and avoid dynamic dispatch on
//! the per-row hot path. `Null` is the distinguished sentinel (§6 of the
//! spec) — there is no separate "is this the sentinel" comparison, it is
//! just a pattern match.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single observed cell value, or the null sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn type_order(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::I64(_) => 2,
            Value::U64(_) => 3,
            Value::F64(_) => 4,
            Value::Str(_) => 5,
            Value::Bytes(_) => 6,
        }
    }
}

// `Value` needs a total order to support the sorted value sets of §4.B, so
// floats are compared with `total_cmp` rather than `partial_cmp` — NaN gets a
// stable (if arbitrary) place in the order instead of breaking it.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (U64(a), U64(b)) => a.cmp(b),
            (F64(a), F64(b)) => a.total_cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Bytes(a), Bytes(b)) => a.cmp(b),
            _ => self.type_order().cmp(&other.type_order()),
        }
    }
}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use Value::*;
        self.type_order().hash(state);
        match self {
            Null => {}
            Bool(b) => b.hash(state),
            I64(i) => i.hash(state),
            U64(u) => u.hash(state),
            F64(f) => f.to_bits().hash(state),
            Str(s) => s.hash(state),
            Bytes(b) => b.hash(state),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}
