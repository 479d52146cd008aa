// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark result construction and comparison.
//!
//! The elapsed time is carried as a structured [`Duration`] so comparison
//! math is exact; the `"123ms"` rendering exists only on the wire.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Outcome of one timed persistence operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub struct BenchmarkResult {
    /// Operation label, e.g. `"insert-bulk"`.
    pub action: String,
    /// Exact number of records passed to or returned from the timed call.
    pub entities: usize,
    /// Wall-clock duration of the timed store call only.
    pub elapsed: Duration,
    /// Populated only when a caller explicitly compares two results.
    pub comparison: Option<Comparison>,
}

impl BenchmarkResult {
    /// Attach comparison fields, consuming self.
    pub fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = Some(comparison);
        self
    }

    /// The wire rendering of the elapsed duration, whole milliseconds.
    pub fn time_elapsed(&self) -> String {
        format!("{}ms", self.elapsed.as_millis())
    }
}

/// Performance delta between a baseline and a candidate result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Human-readable delta sentence.
    pub performance: String,
    /// baseline elapsed divided by candidate elapsed.
    pub speedup: f64,
    /// Percent of baseline time eliminated by the candidate.
    pub reduced_percent: f64,
}

/// Construct a [`BenchmarkResult`] from a completed timed operation.
///
/// Pure construction, no I/O.
pub fn report(action: impl Into<String>, entities: usize, elapsed: Duration) -> BenchmarkResult {
    BenchmarkResult {
        action: action.into(),
        entities,
        elapsed,
        comparison: None,
    }
}

/// Compute the performance delta of `candidate` relative to `baseline`.
///
/// Speed-up factor is `baseline.elapsed / candidate.elapsed`; percent
/// reduction is `(baseline.elapsed - candidate.elapsed) / baseline.elapsed
/// * 100` (negative when the candidate is slower).
///
/// # Errors
///
/// Returns [`HarnessError::InvalidArgument`] when either elapsed duration
/// is zero, which would make the ratio undefined.
pub fn compare(baseline: &BenchmarkResult, candidate: &BenchmarkResult) -> Result<Comparison> {
    if baseline.elapsed.is_zero() {
        return Err(HarnessError::invalid(format!(
            "baseline '{}' has zero elapsed time",
            baseline.action
        )));
    }
    if candidate.elapsed.is_zero() {
        return Err(HarnessError::invalid(format!(
            "candidate '{}' has zero elapsed time",
            candidate.action
        )));
    }

    let base = baseline.elapsed.as_nanos() as f64;
    let cand = candidate.elapsed.as_nanos() as f64;
    let speedup = base / cand;
    let reduced_percent = (base - cand) / base * 100.0;

    let performance = if speedup >= 1.0 {
        format!(
            "'{}' is {:.2}x faster than '{}'",
            candidate.action, speedup, baseline.action
        )
    } else {
        format!(
            "'{}' is {:.2}x slower than '{}'",
            candidate.action,
            1.0 / speedup,
            baseline.action
        )
    };

    Ok(Comparison {
        performance,
        speedup,
        reduced_percent,
    })
}

/// JSON shape of a result: `timeElapsed` keeps the human-readable string
/// the original API exposed, `elapsedMs` carries the raw value for
/// machine comparison.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResult {
    action: String,
    entities: usize,
    #[serde(default)]
    time_elapsed: String,
    elapsed_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comparison: Option<Comparison>,
}

impl From<BenchmarkResult> for WireResult {
    fn from(result: BenchmarkResult) -> Self {
        WireResult {
            time_elapsed: result.time_elapsed(),
            elapsed_ms: result.elapsed.as_nanos() as f64 / 1e6,
            action: result.action,
            entities: result.entities,
            comparison: result.comparison,
        }
    }
}

impl TryFrom<WireResult> for BenchmarkResult {
    type Error = String;

    fn try_from(wire: WireResult) -> std::result::Result<Self, Self::Error> {
        if !wire.elapsed_ms.is_finite() || wire.elapsed_ms < 0.0 {
            return Err(format!("elapsedMs must be non-negative, got {}", wire.elapsed_ms));
        }
        Ok(BenchmarkResult {
            action: wire.action,
            entities: wire.entities,
            elapsed: Duration::from_secs_f64(wire.elapsed_ms / 1000.0),
            comparison: wire.comparison,
        })
    }
}
