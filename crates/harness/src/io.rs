// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for benchmark results.
//!
//! Results from a suite run land under an output directory as one raw JSON
//! file per operation, a combined `all_results.json`, and a markdown
//! summary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bulkbench_core::BenchmarkResult;

use crate::markdown;

/// Default output directory for suite runs.
pub const DEFAULT_OUTPUT_DIR: &str = "benchmarks/output";

/// Name of the combined results file.
pub const ALL_RESULTS_FILE: &str = "all_results.json";

/// Name of the markdown summary file.
pub const SUMMARY_FILE: &str = "summary.md";

fn raw_dir(dir: &Path) -> PathBuf {
    dir.join("raw")
}

/// Ensure the output directory layout exists.
pub fn ensure_output_dirs(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(raw_dir(dir))
}

/// Write a result slice to a JSON file.
pub fn write_results_json(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// Write one result to the raw directory, named after its action.
pub fn write_raw_result(dir: &Path, result: &BenchmarkResult) -> io::Result<()> {
    ensure_output_dirs(dir)?;
    let path = raw_dir(dir).join(format!("{}.json", result.action.replace('/', "_")));
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// Write the markdown summary file.
pub fn write_summary(dir: &Path, results: &[BenchmarkResult]) -> io::Result<()> {
    ensure_output_dirs(dir)?;
    fs::write(dir.join(SUMMARY_FILE), markdown::generate_summary(results))
}

/// Write all suite outputs: raw JSON per result, combined JSON, summary.
pub fn write_all_outputs(dir: &Path, results: &[BenchmarkResult]) -> io::Result<()> {
    ensure_output_dirs(dir)?;
    for result in results {
        write_raw_result(dir, result)?;
    }
    write_results_json(results, dir.join(ALL_RESULTS_FILE))?;
    write_summary(dir, results)
}

/// Read results back from a combined JSON file.
pub fn read_results_json(path: impl AsRef<Path>) -> io::Result<Vec<BenchmarkResult>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
