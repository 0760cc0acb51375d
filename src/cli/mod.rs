//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Mascara using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Mascara - masks CPF, CNPJ, email, phone and names in text
#[derive(Parser, Debug)]
#[command(name = "mascara")]
#[command(version, about, long_about = None)]
#[command(author = "Mascara Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mascara.toml", env = "MASCARA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MASCARA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask PII in text read from a file or stdin
    Mask(commands::mask::MaskArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Execute the selected command and return the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Mask(args) => args.execute(&self.config),
            Commands::ValidateConfig(args) => args.execute(&self.config),
            Commands::Init(args) => args.execute(),
        }
    }
}
