// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown report generation for benchmark results.

use std::fmt::Write;

use bulkbench_core::BenchmarkResult;

/// Generate the summary table for a suite run.
pub fn generate_summary(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Action | Entities | Elapsed |").unwrap();
    writeln!(output, "|--------|----------|---------|").unwrap();

    for result in results {
        writeln!(
            output,
            "| {} | {} | {} |",
            result.action,
            result.entities,
            result.time_elapsed()
        )
        .unwrap();
    }

    let comparisons: Vec<&BenchmarkResult> =
        results.iter().filter(|r| r.comparison.is_some()).collect();
    if !comparisons.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "## Comparisons").unwrap();
        writeln!(output).unwrap();
        for result in comparisons {
            let cmp = result.comparison.as_ref().unwrap();
            writeln!(
                output,
                "- {} (speedup {:.2}x, {:.1}% reduction)",
                cmp.performance, cmp.speedup, cmp.reduced_percent
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Total operations: {}", results.len()).unwrap();

    output
}

/// Generate a detailed report with the full JSON of every result.
pub fn generate_detailed_report(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    writeln!(output, "# Detailed Benchmark Report").unwrap();
    writeln!(output).unwrap();

    for result in results {
        writeln!(output, "## {}", result.action).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Entities:** {}", result.entities).unwrap();
        writeln!(output, "**Elapsed:** {}", result.time_elapsed()).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "```json").unwrap();
        writeln!(
            output,
            "{}",
            serde_json::to_string_pretty(result).unwrap_or_default()
        )
        .unwrap();
        writeln!(output, "```").unwrap();
        writeln!(output).unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkbench_core::{compare, report};
    use std::time::Duration;

    #[test]
    fn summary_lists_results_and_comparisons() {
        let baseline = report("insert-naive", 100, Duration::from_millis(200));
        let candidate = report("insert-bulk", 100, Duration::from_millis(50));
        let cmp = compare(&baseline, &candidate).unwrap();
        let results = vec![baseline, candidate.with_comparison(cmp)];

        let summary = generate_summary(&results);
        assert!(summary.contains("| insert-naive | 100 | 200ms |"));
        assert!(summary.contains("| insert-bulk | 100 | 50ms |"));
        assert!(summary.contains("speedup 4.00x"));
        assert!(summary.contains("75.0% reduction"));
        assert!(summary.contains("Total operations: 2"));
    }

    #[test]
    fn detailed_report_embeds_wire_json() {
        let results = vec![report("read-all", 7, Duration::from_millis(3))];
        let detailed = generate_detailed_report(&results);
        assert!(detailed.contains("## read-all"));
        assert!(detailed.contains("\"timeElapsed\": \"3ms\""));
    }
}
