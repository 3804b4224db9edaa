//! Error types for collection operations.
//!
//! Every fallible operation on [`Collection`](super::Collection) reports its
//! failure through [`CollectionError`]. Errors are raised synchronously by the
//! call that violates a precondition; no partial result is ever returned.

use thiserror::Error;

/// Represents the ways a collection operation can fail.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::{Collection, CollectionError};
///
/// let mut collection: Collection<usize, i32> = Collection::new();
/// assert_eq!(
///     collection.pop(),
///     Err(CollectionError::EmptyCollection { operation: "pop" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The operation needs at least one entry.
    #[error("{operation}: the collection is empty")]
    EmptyCollection {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// `combine` was given collections of different lengths.
    #[error("combine: length mismatch ({left} keys, {right} values)")]
    LengthMismatch {
        /// The number of entries supplying keys.
        left: usize,
        /// The number of entries supplying values.
        right: usize,
    },
    /// An argument was outside the accepted range.
    #[error("{operation}: {reason}")]
    InvalidArgument {
        /// The name of the operation that failed.
        operation: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
    /// A spread sequence had fewer elements than the callback takes.
    #[error("map_spread: callback takes {expected} arguments, sequence has {actual}")]
    Arity {
        /// The number of positional arguments the callback takes.
        expected: usize,
        /// The number of elements in the spread sequence.
        actual: usize,
    },
    /// No entry satisfied the predicate.
    #[error("{operation}: no entry matches the predicate")]
    NotFound {
        /// The name of the operation that failed.
        operation: &'static str,
    },
}

impl CollectionError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        tracing::debug!(operation, "operation requires a non-empty collection");
        Self::EmptyCollection { operation }
    }

    pub(crate) fn invalid_argument(operation: &'static str, reason: String) -> Self {
        tracing::debug!(operation, %reason, "rejected argument");
        Self::InvalidArgument { operation, reason }
    }

    pub(crate) fn not_found(operation: &'static str) -> Self {
        tracing::debug!(operation, "no entry matched the predicate");
        Self::NotFound { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_collection_display() {
        let error = CollectionError::EmptyCollection { operation: "pop" };
        assert_eq!(format!("{error}"), "pop: the collection is empty");
    }

    #[rstest]
    fn test_length_mismatch_display() {
        let error = CollectionError::LengthMismatch { left: 2, right: 3 };
        assert_eq!(
            format!("{error}"),
            "combine: length mismatch (2 keys, 3 values)"
        );
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = CollectionError::invalid_argument("chunk", "size must be positive".to_string());
        assert_eq!(format!("{error}"), "chunk: size must be positive");
    }

    #[rstest]
    fn test_arity_display() {
        let error = CollectionError::Arity {
            expected: 3,
            actual: 1,
        };
        assert_eq!(
            format!("{error}"),
            "map_spread: callback takes 3 arguments, sequence has 1"
        );
    }

    #[rstest]
    fn test_not_found_display() {
        let error = CollectionError::not_found("first_where");
        assert_eq!(
            format!("{error}"),
            "first_where: no entry matches the predicate"
        );
    }

    #[rstest]
    fn test_error_has_no_source() {
        use std::error::Error;

        let error = CollectionError::empty("random");
        assert!(error.source().is_none());
    }
}
