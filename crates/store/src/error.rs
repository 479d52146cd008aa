// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by store implementations.

use thiserror::Error;

/// Failures reported by a [`CustomerStore`](crate::CustomerStore)
/// implementation. The runner wraps these into the harness-wide
/// `HarnessError::Store` variant together with the operation label.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any failure from the database driver: connectivity, constraint
    /// violation, timeout, serialization conflict.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update was attempted on a record that has no store-assigned id,
    /// e.g. one inserted with output mapping disabled and never re-read.
    #[error("record at batch index {0} has no store-assigned id")]
    Unpersisted(usize),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
