// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use bulkbench_core::Customer;

use crate::error::Result;

/// Configuration for a bulk insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkInsertOptions {
    /// When true, store-assigned identifiers are mapped back onto the
    /// in-memory records after insert. Disabling this skips the output
    /// round trip, trading result completeness for speed.
    pub auto_map_output: bool,
}

impl Default for BulkInsertOptions {
    fn default() -> Self {
        BulkInsertOptions {
            auto_map_output: true,
        }
    }
}

/// The persistence collaborator as seen by the operation runner.
///
/// Each method is one complete store interaction: implementations must
/// acquire whatever session or transaction they need inside the call and
/// release it on every exit path, so the caller can time the call as a
/// single flush/commit unit. No method retries on failure.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// The naive insert flush: one statement per record inside a single
    /// transaction, committed before returning. Returns the number of
    /// rows written.
    async fn insert_rows(&self, records: &[Customer]) -> Result<u64>;

    /// Insert the whole batch in one multi-row statement. With
    /// `auto_map_output` enabled, store-assigned ids are written back
    /// onto `records` in batch order.
    async fn bulk_insert(&self, records: &mut [Customer], options: BulkInsertOptions)
        -> Result<u64>;

    /// The naive update flush: one statement per record by id inside a
    /// single transaction.
    async fn update_rows(&self, records: &[Customer]) -> Result<u64>;

    /// Update the whole batch in one multi-row statement joining on id.
    async fn bulk_update(&self, records: &[Customer]) -> Result<u64>;

    /// Fetch every record in the store, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<Customer>>;

    /// Fetch the records whose id is in `ids`, in one round trip.
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<Customer>>;
}
