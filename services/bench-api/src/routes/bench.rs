// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark routes, one per persistence strategy.
//!
//! Insert routes generate their batch per request (generation is not part
//! of the timed interval); update routes fetch the current working set
//! before mutating it. Concurrent callers share nothing but the store and
//! may race on the same rows.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use bulkbench_core::{compare, generate, BenchmarkResult};
use bulkbench_store::BulkInsertOptions;

use crate::error::ApiError;
use crate::models::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertParams {
    /// Number of records to generate; falls back to the configured default.
    pub count: Option<i64>,
    /// Maps store-assigned ids back onto the batch after a bulk insert.
    /// Defaults to true.
    pub auto_map_output_direction: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    /// Comma-separated id list, e.g. `?ids=1,2,3`.
    pub ids: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// The result to compare against.
    pub baseline: BenchmarkResult,
    /// The result being evaluated.
    pub candidate: BenchmarkResult,
}

/// Benchmark route table.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bench/insert-naive", post(insert_naive))
        .route("/bench/insert-bulk", post(insert_bulk))
        .route("/bench/update-naive", put(update_naive))
        .route("/bench/update-bulk", put(update_bulk))
        .route("/bench/read-all", get(read_all))
        .route("/bench/read-filtered", get(read_filtered))
        .route("/bench/compare", post(compare_results))
}

async fn insert_naive(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsertParams>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let count = params.count.unwrap_or(state.default_count);
    let records = generate(count)?;
    let result = state.runner.insert_naive(records).await?;
    Ok(Json(result))
}

async fn insert_bulk(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsertParams>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let count = params.count.unwrap_or(state.default_count);
    let options = BulkInsertOptions {
        auto_map_output: params.auto_map_output_direction.unwrap_or(true),
    };
    let records = generate(count)?;
    let result = state.runner.insert_bulk(records, options).await?;
    Ok(Json(result))
}

async fn update_naive(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let records = state.runner.working_set().await?;
    let result = state.runner.update_naive(records).await?;
    Ok(Json(result))
}

async fn update_bulk(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let records = state.runner.working_set().await?;
    let result = state.runner.update_bulk(records).await?;
    Ok(Json(result))
}

async fn read_all(State(state): State<Arc<AppState>>) -> Result<Json<BenchmarkResult>, ApiError> {
    let result = state.runner.read_all().await?;
    Ok(Json(result))
}

async fn read_filtered(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let ids = parse_ids(&params.ids)?;
    let result = state.runner.read_filtered(ids).await?;
    Ok(Json(result))
}

async fn compare_results(
    Json(request): Json<CompareRequest>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let comparison = compare(&request.baseline, &request.candidate)?;
    info!(
        baseline = %request.baseline.action,
        candidate = %request.candidate.action,
        speedup = comparison.speedup,
        "results compared"
    );
    Ok(Json(request.candidate.with_comparison(comparison)))
}

fn parse_ids(raw: &str) -> Result<Vec<i64>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ApiError::invalid_argument(format!("'{part}' is not a valid id")))
        })
        .collect()
}
