use clap::Parser;
use mascara::cli::Cli;
use mascara::config::{load_config_or_default, LoggingConfig};
use mascara::log_error_with_context;
use mascara::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A broken config falls back to console logging; the command itself
    // reports the configuration error.
    let (log_level, logging_config) = match load_config_or_default(&cli.config) {
        Ok(config) => (
            cli.log_level.clone().unwrap_or(config.application.log_level),
            config.logging,
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Mascara starting");

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(&e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // process::exit skips destructors; flush the file appender first
    drop(guard);
    process::exit(exit_code);
}
