// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! PostgreSQL store implementation over `sqlx`.
//!
//! Naive operations issue one statement per record inside a single
//! transaction, matching the per-row flush of a general-purpose mapper.
//! Bulk operations pack the whole batch into three or four array
//! parameters via `UNNEST`, so the statement never approaches the
//! per-parameter limit no matter how large the batch is.

use async_trait::async_trait;
use bulkbench_core::Customer;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::{BulkInsertOptions, CustomerStore};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS customers (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    is_active BOOLEAN NOT NULL
)";

/// PostgreSQL-backed [`CustomerStore`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    description: String,
    is_active: bool,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            is_active: row.is_active,
        }
    }
}

/// Split a batch into parallel column vectors for array binding.
fn columns(records: &[Customer]) -> (Vec<String>, Vec<String>, Vec<bool>) {
    let mut names = Vec::with_capacity(records.len());
    let mut descriptions = Vec::with_capacity(records.len());
    let mut flags = Vec::with_capacity(records.len());
    for record in records {
        names.push(record.name.clone());
        descriptions.push(record.description.clone());
        flags.push(record.is_active);
    }
    (names, descriptions, flags)
}

impl PgStore {
    /// Connect a pool to the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect(database_url)
            .await?;
        Ok(PgStore { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Create the benchmark table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Remove every row, used between suite runs.
    pub async fn truncate(&self) -> Result<()> {
        sqlx::query("TRUNCATE customers RESTART IDENTITY")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for PgStore {
    async fn insert_rows(&self, records: &[Customer]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        for record in records {
            sqlx::query("INSERT INTO customers (name, description, is_active) VALUES ($1, $2, $3)")
                .bind(&record.name)
                .bind(&record.description)
                .bind(record.is_active)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        debug!(rows = records.len(), "naive insert committed");
        Ok(records.len() as u64)
    }

    async fn bulk_insert(
        &self,
        records: &mut [Customer],
        options: BulkInsertOptions,
    ) -> Result<u64> {
        let (names, descriptions, flags) = columns(records);

        if options.auto_map_output {
            let ids: Vec<i64> = sqlx::query_scalar(
                "INSERT INTO customers (name, description, is_active)
                 SELECT * FROM UNNEST($1::text[], $2::text[], $3::boolean[])
                 RETURNING id",
            )
            .bind(&names)
            .bind(&descriptions)
            .bind(&flags)
            .fetch_all(&self.pool)
            .await?;

            // RETURNING preserves batch order for a single INSERT ... SELECT.
            for (record, id) in records.iter_mut().zip(ids.iter()) {
                record.id = Some(*id);
            }
            Ok(ids.len() as u64)
        } else {
            let done = sqlx::query(
                "INSERT INTO customers (name, description, is_active)
                 SELECT * FROM UNNEST($1::text[], $2::text[], $3::boolean[])",
            )
            .bind(&names)
            .bind(&descriptions)
            .bind(&flags)
            .execute(&self.pool)
            .await?;
            Ok(done.rows_affected())
        }
    }

    async fn update_rows(&self, records: &[Customer]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        for (index, record) in records.iter().enumerate() {
            let id = record.id.ok_or(StoreError::Unpersisted(index))?;
            sqlx::query(
                "UPDATE customers SET name = $1, description = $2, is_active = $3 WHERE id = $4",
            )
            .bind(&record.name)
            .bind(&record.description)
            .bind(record.is_active)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        debug!(rows = records.len(), "naive update committed");
        Ok(records.len() as u64)
    }

    async fn bulk_update(&self, records: &[Customer]) -> Result<u64> {
        let mut ids = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            ids.push(record.id.ok_or(StoreError::Unpersisted(index))?);
        }
        let (names, descriptions, flags) = columns(records);

        let done = sqlx::query(
            "UPDATE customers AS c
             SET name = u.name, description = u.description, is_active = u.is_active
             FROM (SELECT * FROM UNNEST($1::bigint[], $2::text[], $3::text[], $4::boolean[]))
                  AS u(id, name, description, is_active)
             WHERE c.id = u.id",
        )
        .bind(&ids)
        .bind(&names)
        .bind(&descriptions)
        .bind(&flags)
        .execute(&self.pool)
        .await?;
        Ok(done.rows_affected())
    }

    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        let rows: Vec<CustomerRow> =
            sqlx::query_as("SELECT id, name, description, is_active FROM customers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            "SELECT id, name, description, is_active FROM customers
             WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
