// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-memory store, a test double for runs without a database.
//!
//! Semantics mirror [`PgStore`](crate::PgStore): monotonically assigned
//! ids, the auto-map flag controls whether inserted records learn their
//! ids, updates require a persisted id. Timings against this store say
//! nothing about any real backend.

use std::sync::Mutex;

use async_trait::async_trait;
use bulkbench_core::Customer;

use crate::error::{Result, StoreError};
use crate::traits::{BulkInsertOptions, CustomerStore};

/// Vector-backed [`CustomerStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Customer>,
    next_id: i64,
}

impl Inner {
    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("store lock poisoned").rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn insert_rows(&self, records: &[Customer]) -> Result<u64> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        for record in records {
            let id = inner.assign_id();
            let mut row = record.clone();
            row.id = Some(id);
            inner.rows.push(row);
        }
        Ok(records.len() as u64)
    }

    async fn bulk_insert(
        &self,
        records: &mut [Customer],
        options: BulkInsertOptions,
    ) -> Result<u64> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        for record in records.iter_mut() {
            let id = inner.assign_id();
            let mut row = record.clone();
            row.id = Some(id);
            inner.rows.push(row);
            if options.auto_map_output {
                record.id = Some(id);
            }
        }
        Ok(records.len() as u64)
    }

    async fn update_rows(&self, records: &[Customer]) -> Result<u64> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let mut updated = 0;
        for (index, record) in records.iter().enumerate() {
            let id = record.id.ok_or(StoreError::Unpersisted(index))?;
            if let Some(row) = inner.rows.iter_mut().find(|row| row.id == Some(id)) {
                row.name = record.name.clone();
                row.description = record.description.clone();
                row.is_active = record.is_active;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn bulk_update(&self, records: &[Customer]) -> Result<u64> {
        self.update_rows(records).await
    }

    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut rows = inner.rows.clone();
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<Customer>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut rows: Vec<Customer> = inner
            .rows
            .iter()
            .filter(|row| row.id.map(|id| ids.contains(&id)).unwrap_or(false))
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkbench_core::generate;

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        store.insert_rows(&generate(3).unwrap()).await.unwrap();
        let rows = store.fetch_all().await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn bulk_insert_maps_ids_only_when_enabled() {
        let store = MemoryStore::new();

        let mut mapped = generate(2).unwrap();
        store
            .bulk_insert(&mut mapped, BulkInsertOptions::default())
            .await
            .unwrap();
        assert!(mapped.iter().all(|r| r.id.is_some()));

        let mut unmapped = generate(2).unwrap();
        store
            .bulk_insert(
                &mut unmapped,
                BulkInsertOptions {
                    auto_map_output: false,
                },
            )
            .await
            .unwrap();
        assert!(unmapped.iter().all(|r| r.id.is_none()));
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn update_requires_persisted_id() {
        let store = MemoryStore::new();
        let records = generate(1).unwrap();
        let err = store.update_rows(&records).await.unwrap_err();
        assert!(matches!(err, StoreError::Unpersisted(0)));
    }

    #[tokio::test]
    async fn fetch_by_ids_returns_exact_matches() {
        let store = MemoryStore::new();
        let mut records = generate(10).unwrap();
        store
            .bulk_insert(&mut records, BulkInsertOptions::default())
            .await
            .unwrap();

        let wanted: Vec<i64> = records
            .iter()
            .filter_map(|r| r.id)
            .filter(|id| id % 2 == 1)
            .collect();
        let fetched = store.fetch_by_ids(&wanted).await.unwrap();
        assert_eq!(fetched.len(), wanted.len());
        assert!(fetched.iter().all(|r| wanted.contains(&r.id.unwrap())));
    }
}
