// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! bench-api entry point.

use std::sync::Arc;

use anyhow::Context;
use bench_api::config::ApiConfig;
use bench_api::models::AppState;
use bulkbench_harness::BenchRunner;
use bulkbench_store::PgStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::load().context("loading configuration")?;

    let store = PgStore::connect(&config.database_url)
        .await
        .context("connecting to database")?;
    store.ensure_schema().await.context("creating schema")?;

    let state = Arc::new(AppState::new(
        BenchRunner::new(Arc::new(store)),
        config.default_count,
    ));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "bench-api listening");

    axum::serve(listener, bench_api::app(state))
        .await
        .context("serving")?;
    Ok(())
}
