//! Column descriptors: an ordinal and a display name.
//!
//! The ordinal is the column's identity throughout the engine; the name is
//! carried only for reporting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub ordinal: usize,
    pub name: String,
}

impl Column {
    pub fn new(ordinal: usize, name: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
        }
    }
}

/// Check the §6 precondition that the i-th descriptor's ordinal equals `i`.
///
/// Returns the index of the first column that violates it, if any.
pub fn find_ordinal_mismatch(columns: &[Column]) -> Option<usize> {
    columns
        .iter()
        .enumerate()
        .find(|(i, c)| c.ordinal != *i)
        .map(|(i, _)| i)
}
