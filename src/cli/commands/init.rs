//! Init command implementation
//!
//! Writes a commented sample `mascara.toml`.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mascara.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: mascara validate-config");
                println!("  3. Mask text: mascara mask --input notes.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# Mascara Configuration File
# Every setting is optional; the values below are the defaults unless noted.

[application]
# trace, debug, info, warn, error
log_level = "info"

[anonymization]
# CPF, CNPJ, email and phone numbers are always masked.
# Set to true to also mask capitalized words (proper names).
anonymize_names = false

[output]
# Format for --report and --dry-run: console or json
report_format = "console"

[logging]
# JSON log files; console logs always go to stderr
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
    }
}
