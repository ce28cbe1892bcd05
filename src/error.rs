//! Error types for index mutation and selection.

use thiserror::Error;

/// Errors raised at the point of the offending call.
///
/// Empty result sets, zero-width inputs, and out-of-range positional access
/// are *not* errors — those come back as empty collections or `None`.
/// Stale containment snapshots are a documented caller obligation, never a
/// runtime-detected condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The queried type handle was not issued by the index's type system.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A single-result operation matched zero or several annotations.
    #[error("expected exactly one [{type_name}], found {found}")]
    AmbiguousResult { type_name: String, found: usize },

    /// A caller-supplied `[begin, end)` with `begin > end`.
    #[error("invalid range: begin {begin} is greater than end {end}")]
    InvalidRange { begin: i64, end: i64 },
}

/// Result type for index and selection operations.
pub type QueryResult<T> = Result<T, QueryError>;
