//! CLI for the bulkbench suite.
//!
//! The `run` subcommand executes every benchmark operation against a
//! PostgreSQL database and writes results to the output directory; the
//! `report` subcommand re-renders a saved results file as markdown.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bulkbench_harness::{io, markdown, run_suite, BenchRunner};
use bulkbench_store::PgStore;
use clap::{Parser, Subcommand};

/// Bulk-vs-naive persistence benchmark suite.
#[derive(Parser, Debug)]
#[command(name = "bulkbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full benchmark suite against a PostgreSQL database.
    ///
    /// The benchmark table is created if missing and truncated before the
    /// run, then each operation executes once: naive insert, bulk insert
    /// (with and without output mapping), naive update, bulk update, full
    /// read, filtered read. Results are written to the output directory as
    /// raw JSON files, a combined all_results.json, and a summary.md.
    Run {
        /// Database connection string.
        #[arg(long, env = "BULKBENCH_DATABASE_URL")]
        database_url: String,

        /// Number of records generated per insert operation.
        #[arg(short, long, default_value_t = 5000)]
        count: i64,

        /// Output directory for result files.
        #[arg(short, long, default_value = io::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Print each result as it completes.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render a saved results file as a detailed markdown report.
    Report {
        /// Path to an all_results.json produced by `run`.
        input: PathBuf,
    },
}

/// Run the CLI with the parsed arguments.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            database_url,
            count,
            output,
            verbose,
        } => {
            let store = PgStore::connect(&database_url)
                .await
                .context("connecting to database")?;
            store.ensure_schema().await.context("creating schema")?;
            store
                .truncate()
                .await
                .context("truncating benchmark table")?;

            let runner = BenchRunner::new(Arc::new(store));
            let results = run_suite(&runner, count).await?;

            if verbose {
                for result in &results {
                    println!(
                        "{}: {} entities in {}",
                        result.action,
                        result.entities,
                        result.time_elapsed()
                    );
                }
            }

            io::write_all_outputs(&output, &results).context("writing result files")?;
            println!("Completed {} operations", results.len());
            println!("Results written to {}", output.display());
            Ok(())
        }
        Commands::Report { input } => {
            let results = io::read_results_json(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            print!("{}", markdown::generate_detailed_report(&results));
            Ok(())
        }
    }
}
