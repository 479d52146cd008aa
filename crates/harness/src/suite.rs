// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Full-suite orchestration for CLI runs.

use bulkbench_core::{compare, generate, BenchmarkResult, HarnessError};
use bulkbench_store::BulkInsertOptions;
use tracing::warn;

use crate::runner::BenchRunner;

/// Run every benchmark operation once, in order, against the given runner.
///
/// Insert operations each get a freshly generated batch of `count` records;
/// update operations re-fetch the working set between runs so both see the
/// same row population. Bulk results carry a comparison against their naive
/// baseline. The caller is responsible for starting from an empty table if
/// it wants counts to line up across runs.
pub async fn run_suite(runner: &BenchRunner, count: i64) -> Result<Vec<BenchmarkResult>, HarnessError> {
    let mut results = Vec::with_capacity(7);

    let insert_naive = runner.insert_naive(generate(count)?).await?;
    let insert_bulk = runner
        .insert_bulk(generate(count)?, BulkInsertOptions::default())
        .await?;
    let insert_nomap = runner
        .insert_bulk(
            generate(count)?,
            BulkInsertOptions {
                auto_map_output: false,
            },
        )
        .await?;

    let update_naive = runner.update_naive(runner.working_set().await?).await?;
    let update_bulk = runner.update_bulk(runner.working_set().await?).await?;

    let read_all = runner.read_all().await?;
    let ids: Vec<i64> = runner
        .working_set()
        .await?
        .iter()
        .filter_map(|record| record.id)
        .step_by(2)
        .collect();
    let read_filtered = runner.read_filtered(ids).await?;

    results.push(insert_naive.clone());
    results.push(attach(&insert_naive, insert_bulk));
    results.push(attach(&insert_naive, insert_nomap));
    results.push(update_naive.clone());
    results.push(attach(&update_naive, update_bulk));
    results.push(read_all.clone());
    results.push(attach(&read_all, read_filtered));

    Ok(results)
}

/// Attach a comparison against `baseline`, keeping the result as-is when
/// the comparison is undefined (zero-duration baseline).
fn attach(baseline: &BenchmarkResult, candidate: BenchmarkResult) -> BenchmarkResult {
    match compare(baseline, &candidate) {
        Ok(comparison) => candidate.with_comparison(comparison),
        Err(err) => {
            warn!(
                baseline = %baseline.action,
                candidate = %candidate.action,
                %err,
                "skipping comparison"
            );
            candidate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::labels;
    use bulkbench_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn suite_runs_every_operation_in_order() {
        let runner = BenchRunner::new(Arc::new(MemoryStore::new()));
        let results = run_suite(&runner, 200).await.unwrap();

        let actions: Vec<&str> = results.iter().map(|r| r.action.as_str()).collect();
        assert_eq!(
            actions,
            vec![
                labels::INSERT_NAIVE,
                labels::INSERT_BULK,
                labels::INSERT_BULK_NOMAP,
                labels::UPDATE_NAIVE,
                labels::UPDATE_BULK,
                labels::READ_ALL,
                labels::READ_FILTERED,
            ]
        );
    }

    #[tokio::test]
    async fn suite_counts_reflect_the_growing_row_population() {
        let runner = BenchRunner::new(Arc::new(MemoryStore::new()));
        let results = run_suite(&runner, 100).await.unwrap();

        // Three insert batches of 100 each.
        assert_eq!(results[0].entities, 100);
        assert_eq!(results[1].entities, 100);
        assert_eq!(results[2].entities, 100);
        // Updates and the full read see all 300 rows.
        assert_eq!(results[3].entities, 300);
        assert_eq!(results[4].entities, 300);
        assert_eq!(results[5].entities, 300);
        // Filtered read asked for every other id.
        assert_eq!(results[6].entities, 150);
    }

    #[tokio::test]
    async fn suite_leaves_rows_fully_updated() {
        let store = Arc::new(MemoryStore::new());
        let runner = BenchRunner::new(store.clone());
        run_suite(&runner, 50).await.unwrap();

        // Both update passes ran, so every row carries two markers.
        let rows = runner.working_set().await.unwrap();
        assert!(rows
            .iter()
            .all(|r| r.name.starts_with("Updated_Updated_")));
        assert!(rows
            .iter()
            .all(|r| r.description.ends_with("_Updated_Updated")));
    }

    #[tokio::test]
    async fn bulk_results_carry_comparisons() {
        let runner = BenchRunner::new(Arc::new(MemoryStore::new()));
        let results = run_suite(&runner, 100).await.unwrap();

        assert!(results[0].comparison.is_none());
        for result in [&results[1], &results[2], &results[4], &results[6]] {
            // Comparisons may be skipped only for zero-duration baselines,
            // which a real clock does not produce.
            if let Some(cmp) = &result.comparison {
                assert!(cmp.speedup > 0.0);
            }
        }
    }

    #[tokio::test]
    async fn negative_count_fails_before_touching_the_store() {
        let runner = BenchRunner::new(Arc::new(MemoryStore::new()));
        let err = run_suite(&runner, -5).await.unwrap_err();
        assert!(matches!(err, HarnessError::InvalidArgument(_)));
    }
}
