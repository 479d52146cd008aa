// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared application state.

use bulkbench_harness::BenchRunner;

/// State shared by every route handler.
pub struct AppState {
    /// The operation runner over the configured store.
    pub runner: BenchRunner,
    /// Record count used when a request does not pass `?count=`.
    pub default_count: i64,
}

impl AppState {
    /// Build state from a runner and the configured default count.
    pub fn new(runner: BenchRunner, default_count: i64) -> Self {
        AppState {
            runner,
            default_count,
        }
    }
}
