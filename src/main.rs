//! Szachmart storefront CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use szachmart_core::config::ClientConfig;
use szachmart_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    init_logging(&config.logging);

    if let Err(e) = cli.execute(config).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "pretty" => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().compact().with_env_filter(filter).init();
        }
    }
}
