//! bulkbench CLI entry point.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = bulkbench_cli::run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
