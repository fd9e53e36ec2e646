//! The profiler's error taxonomy (see the error handling design section).
//!
//! Three families, all fatal to the current run: `Misuse` (caught at
//! construction time), `RowShape` (a row didn't match the schema), and
//! `Iteration` (the caller's row source failed mid-pass). No retry, no
//! partial `Profile` is ever returned.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("misuse: {0}")]
    Misuse(String),

    #[error(
        "row {row_index} has arity {observed_arity}, expected {expected_arity} (pass {pass_index})"
    )]
    RowShape {
        row_index: usize,
        pass_index: usize,
        expected_arity: usize,
        observed_arity: usize,
    },

    #[error("row iterator failed: {0}")]
    Iteration(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Error with an attached context string, built by `with_context`.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn misuse(msg: impl Into<String>) -> Self {
        Error::Misuse(msg.into())
    }

    pub fn row_shape(
        row_index: usize,
        pass_index: usize,
        expected_arity: usize,
        observed_arity: usize,
    ) -> Self {
        Error::RowShape {
            row_index,
            pass_index,
            expected_arity,
            observed_arity,
        }
    }

    pub fn iteration(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Iteration(Box::new(source))
    }

    /// Wrap this error with the operation that surfaced it, building an
    /// error chain rather than flattening the message.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Operator-facing remediation hints; empty when there is nothing
    /// actionable beyond the error message itself.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::Misuse(msg) if msg.contains("combinationsPerPass") => vec![
                "combinationsPerPass must be greater than 2".into(),
                "increase it to cover more of the column power set per pass".into(),
            ],
            Error::Misuse(msg) if msg.contains("ordinal") => vec![
                "the i-th column descriptor must have ordinal == i".into(),
                "check the schema passed to profile() for gaps or reordering".into(),
            ],
            Error::RowShape {
                expected_arity,
                observed_arity,
                ..
            } => vec![format!(
                "row has {observed_arity} values but the schema declares {expected_arity} columns"
            )],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misuse_carries_message() {
        let e = Error::misuse("combinationsPerPass must be > 2");
        assert!(e.to_string().contains("combinationsPerPass"));
        assert!(!e.suggestions().is_empty());
    }

    #[test]
    fn context_wraps_without_losing_source() {
        let inner = Error::row_shape(3, 0, 4, 2);
        let wrapped = inner.with_context("while scanning pass 0");
        assert!(wrapped.to_string().contains("while scanning pass 0"));
        assert!(wrapped.to_string().contains("row 3"));
    }

    #[test]
    fn row_shape_suggestion_mentions_arity() {
        let e = Error::row_shape(0, 0, 5, 3);
        let s = e.suggestions();
        assert_eq!(s.len(), 1);
        assert!(s[0].contains('5'));
        assert!(s[0].contains('3'));
    }
}
