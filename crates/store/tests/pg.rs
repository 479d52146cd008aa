// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Live-database integration tests.
//!
//! These run only when `BULKBENCH_TEST_DATABASE_URL` points at a throwaway
//! PostgreSQL database; otherwise each test returns immediately. The
//! database is truncated at the start of every test, so do not point this
//! at anything you care about.

use bulkbench_core::generate;
use bulkbench_store::{BulkInsertOptions, CustomerStore, PgStore};
use tokio::sync::{Mutex, MutexGuard};

// Tests share one table, so they take turns.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn test_store() -> Option<(PgStore, MutexGuard<'static, ()>)> {
    let url = std::env::var("BULKBENCH_TEST_DATABASE_URL").ok()?;
    let guard = DB_LOCK.lock().await;
    let store = PgStore::connect(&url).await.expect("connect test database");
    store.ensure_schema().await.expect("create schema");
    store.truncate().await.expect("truncate");
    Some((store, guard))
}

#[tokio::test]
async fn naive_insert_then_read_all() {
    let Some((store, _guard)) = test_store().await else {
        return;
    };

    let records = generate(500).unwrap();
    let written = store.insert_rows(&records).await.unwrap();
    assert_eq!(written, 500);

    let rows = store.fetch_all().await.unwrap();
    assert_eq!(rows.len(), 500);
    assert_eq!(rows[0].name, "Customer_0");
    assert!(rows.iter().all(|r| r.id.is_some()));
}

#[tokio::test]
async fn bulk_insert_maps_ids_in_batch_order() {
    let Some((store, _guard)) = test_store().await else {
        return;
    };

    let mut records = generate(100).unwrap();
    store
        .bulk_insert(&mut records, BulkInsertOptions::default())
        .await
        .unwrap();
    assert!(records.iter().all(|r| r.id.is_some()));

    // Re-reading by the mapped ids must give back the same field values.
    let ids: Vec<i64> = records.iter().filter_map(|r| r.id).collect();
    let fetched = store.fetch_by_ids(&ids).await.unwrap();
    assert_eq!(fetched, records);
}

#[tokio::test]
async fn bulk_insert_without_mapping_leaves_ids_unset() {
    let Some((store, _guard)) = test_store().await else {
        return;
    };

    let mut records = generate(100).unwrap();
    let written = store
        .bulk_insert(
            &mut records,
            BulkInsertOptions {
                auto_map_output: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(written, 100);
    assert!(records.iter().all(|r| r.id.is_none()));
    assert_eq!(store.fetch_all().await.unwrap().len(), 100);
}

#[tokio::test]
async fn bulk_update_rewrites_every_row() {
    let Some((store, _guard)) = test_store().await else {
        return;
    };

    store.insert_rows(&generate(200).unwrap()).await.unwrap();
    let mut rows = store.fetch_all().await.unwrap();
    for row in &mut rows {
        row.apply_update();
    }
    let updated = store.bulk_update(&rows).await.unwrap();
    assert_eq!(updated, 200);

    let rows = store.fetch_all().await.unwrap();
    assert!(rows.iter().all(|r| r.name.starts_with("Updated_")));
    assert!(rows.iter().all(|r| r.description.ends_with("_Updated")));
}

#[tokio::test]
async fn fetch_by_ids_is_exact_for_large_batches() {
    let Some((store, _guard)) = test_store().await else {
        return;
    };

    let mut records = generate(5000).unwrap();
    store
        .bulk_insert(&mut records, BulkInsertOptions::default())
        .await
        .unwrap();

    // Every other id, as one array parameter in one round trip.
    let wanted: Vec<i64> = records
        .iter()
        .filter_map(|r| r.id)
        .step_by(2)
        .collect();
    let fetched = store.fetch_by_ids(&wanted).await.unwrap();
    assert_eq!(fetched.len(), wanted.len());
    let fetched_ids: Vec<i64> = fetched.iter().filter_map(|r| r.id).collect();
    assert_eq!(fetched_ids, wanted);
}
