// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Store collaborator seam for the bulkbench harness.
//!
//! The runner talks to the store only through the [`CustomerStore`] trait,
//! so any SQL-capable backend with a multi-row batching mechanism can be
//! plugged in. Two implementations ship here:
//!
//! - [`PgStore`] - PostgreSQL over `sqlx`, the benchmark target. Bulk
//!   operations use single `UNNEST`-based statements, so one round trip
//!   covers the whole batch regardless of its size.
//! - [`MemoryStore`] - an in-process vector, used by tests and local runs
//!   without a database. Not a meaningful benchmark target.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod memory;
pub mod pg;
mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use pg::PgStore;
pub use traits::{BulkInsertOptions, CustomerStore};
