// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The operation runner.
//!
//! Each public method executes exactly one named persistence strategy and
//! times only the portion that touches the store. In-memory staging (batch
//! preparation, the update mutation loop) happens before the timer starts;
//! that split is the primary output of the benchmark, so keep it intact
//! when adding operations.
//!
//! Concurrent invocations are not coordinated here. Callers racing on the
//! same rows race in the store, which is an accepted property of a
//! benchmark harness, and nothing is retried on failure.

use std::sync::Arc;
use std::time::Instant;

use bulkbench_core::{report, BenchmarkResult, Customer, HarnessError};
use bulkbench_store::{BulkInsertOptions, CustomerStore};
use tracing::info;

/// Operation labels used in results and error reports.
pub mod labels {
    /// Per-row insert flush.
    pub const INSERT_NAIVE: &str = "insert-naive";
    /// Single multi-row insert statement.
    pub const INSERT_BULK: &str = "insert-bulk";
    /// Multi-row insert with output mapping disabled.
    pub const INSERT_BULK_NOMAP: &str = "insert-bulk-nomap";
    /// Per-row update flush.
    pub const UPDATE_NAIVE: &str = "update-naive";
    /// Single multi-row update statement.
    pub const UPDATE_BULK: &str = "update-bulk";
    /// Full-table fetch.
    pub const READ_ALL: &str = "read-all";
    /// Multi-key fetch by id set.
    pub const READ_FILTERED: &str = "read-filtered";
}

/// Executes named benchmark operations against a store collaborator.
#[derive(Clone)]
pub struct BenchRunner {
    store: Arc<dyn CustomerStore>,
}

impl BenchRunner {
    /// Build a runner over the given store.
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        BenchRunner { store }
    }

    /// Untimed full fetch, used to obtain the working set for the update
    /// operations.
    pub async fn working_set(&self) -> Result<Vec<Customer>, HarnessError> {
        self.store
            .fetch_all()
            .await
            .map_err(|e| HarnessError::store(labels::READ_ALL, 0, e))
    }

    /// Stage `records` and time the single per-row insert flush.
    pub async fn insert_naive(&self, records: Vec<Customer>) -> Result<BenchmarkResult, HarnessError> {
        let entities = records.len();
        let started = Instant::now();
        self.store
            .insert_rows(&records)
            .await
            .map_err(|e| HarnessError::store(labels::INSERT_NAIVE, entities, e))?;
        Ok(finish(labels::INSERT_NAIVE, entities, started))
    }

    /// Delegate the whole batch to the bulk collaborator in one timed call.
    ///
    /// With `auto_map_output` disabled the store skips mapping assigned ids
    /// back onto the records; the label changes so the two variants stay
    /// distinguishable in reports.
    pub async fn insert_bulk(
        &self,
        mut records: Vec<Customer>,
        options: BulkInsertOptions,
    ) -> Result<BenchmarkResult, HarnessError> {
        let label = if options.auto_map_output {
            labels::INSERT_BULK
        } else {
            labels::INSERT_BULK_NOMAP
        };
        let entities = records.len();
        let started = Instant::now();
        self.store
            .bulk_insert(&mut records, options)
            .await
            .map_err(|e| HarnessError::store(label, entities, e))?;
        Ok(finish(label, entities, started))
    }

    /// Apply the update mutation to every record (untimed), then time the
    /// per-row update flush.
    pub async fn update_naive(
        &self,
        mut records: Vec<Customer>,
    ) -> Result<BenchmarkResult, HarnessError> {
        for record in &mut records {
            record.apply_update();
        }
        let entities = records.len();
        let started = Instant::now();
        self.store
            .update_rows(&records)
            .await
            .map_err(|e| HarnessError::store(labels::UPDATE_NAIVE, entities, e))?;
        Ok(finish(labels::UPDATE_NAIVE, entities, started))
    }

    /// Apply the update mutation to every record (untimed), then time one
    /// multi-row update statement.
    pub async fn update_bulk(
        &self,
        mut records: Vec<Customer>,
    ) -> Result<BenchmarkResult, HarnessError> {
        for record in &mut records {
            record.apply_update();
        }
        let entities = records.len();
        let started = Instant::now();
        self.store
            .bulk_update(&records)
            .await
            .map_err(|e| HarnessError::store(labels::UPDATE_BULK, entities, e))?;
        Ok(finish(labels::UPDATE_BULK, entities, started))
    }

    /// Time a full-table fetch. Entity count is the number of rows
    /// returned.
    pub async fn read_all(&self) -> Result<BenchmarkResult, HarnessError> {
        let started = Instant::now();
        let rows = self
            .store
            .fetch_all()
            .await
            .map_err(|e| HarnessError::store(labels::READ_ALL, 0, e))?;
        Ok(finish(labels::READ_ALL, rows.len(), started))
    }

    /// Time a multi-key fetch. This is a documented alternative strategy,
    /// not a performance guarantee over the full scan.
    pub async fn read_filtered(&self, ids: Vec<i64>) -> Result<BenchmarkResult, HarnessError> {
        let started = Instant::now();
        let rows = self
            .store
            .fetch_by_ids(&ids)
            .await
            .map_err(|e| HarnessError::store(labels::READ_FILTERED, ids.len(), e))?;
        Ok(finish(labels::READ_FILTERED, rows.len(), started))
    }
}

fn finish(action: &str, entities: usize, started: Instant) -> BenchmarkResult {
    let elapsed = started.elapsed();
    info!(
        action,
        entities,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "benchmark operation completed"
    );
    report(action, entities, elapsed)
}
