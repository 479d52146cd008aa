// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Harness-wide error taxonomy.
//!
//! Two kinds of failure surface from the harness: bad input to a pure
//! component ([`HarnessError::InvalidArgument`]) and a failure reported by
//! the persistence collaborator ([`HarnessError::Store`]). Both propagate
//! to the caller unchanged; nothing inside the harness retries.

use thiserror::Error;

/// Boxed source error carried by [`HarnessError::Store`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the benchmark harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Bad input to the generator or reporter (negative count,
    /// zero-duration comparison baseline).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A failure surfaced by the persistence collaborator, tagged with the
    /// operation that was running and how many entities it was handling.
    #[error("store operation '{operation}' failed ({entities} entities): {source}")]
    Store {
        /// Label of the operation that failed.
        operation: String,
        /// Number of entities the operation attempted to process.
        entities: usize,
        /// The underlying collaborator error.
        #[source]
        source: BoxError,
    },
}

impl HarnessError {
    /// Build an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        HarnessError::InvalidArgument(msg.into())
    }

    /// Wrap a collaborator failure with the operation label and the entity
    /// count it was attempting.
    pub fn store(operation: impl Into<String>, entities: usize, source: impl Into<BoxError>) -> Self {
        HarnessError::Store {
            operation: operation.into(),
            entities,
            source: source.into(),
        }
    }

    /// Machine-readable error kind, used by the HTTP boundary.
    pub fn code(&self) -> &'static str {
        match self {
            HarnessError::InvalidArgument(_) => "INVALID_ARGUMENT",
            HarnessError::Store { .. } => "STORE_ERROR",
        }
    }
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_carries_operation_and_count() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "gone");
        let err = HarnessError::store("insert-naive", 5000, inner);
        let msg = err.to_string();
        assert!(msg.contains("insert-naive"));
        assert!(msg.contains("5000"));
        assert_eq!(err.code(), "STORE_ERROR");
    }

    #[test]
    fn invalid_argument_code() {
        assert_eq!(HarnessError::invalid("count").code(), "INVALID_ARGUMENT");
    }
}
