//! Command-line front end for the Fibonacci engine.

mod app;
mod config;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = config::AppConfig::parse();
    let engine = fibonacci_engine::default_engine();
    app::run(&config, engine, &mut std::io::stdout().lock())
}
