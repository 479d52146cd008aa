// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP API for the bulkbench persistence benchmarks.
//!
//! One route per benchmark operation; every successful response is a
//! `BenchmarkResult` in wire form. See [`routes::bench`] for the surface.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use models::AppState;

/// Assemble the application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::bench::routes())
        .merge(routes::health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
