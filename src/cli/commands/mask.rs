//! Mask command implementation
//!
//! Reads text from a file or stdin, masks it and writes the result to a file
//! or stdout. Status messages and reports go to stderr unless `--dry-run` is
//! used, in which case the report is the only thing written to stdout.

use crate::anonymization::{AnonymizationEngine, AnonymizationOptions, MaskReport};
use crate::config::{load_config_or_default, ReportFormat};
use crate::domain::MascaraError;
use crate::log_mask_summary;
use anyhow::Context;
use clap::Args;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Read text from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write masked text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also mask capitalized words that look like proper names
    #[arg(long, conflicts_with = "no_names")]
    pub names: bool,

    /// Leave names alone even if the configuration enables name masking
    #[arg(long)]
    pub no_names: bool,

    /// Print a masking report to stderr
    #[arg(long)]
    pub report: bool,

    /// Report format (overrides output.report_format)
    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,

    /// Also save the masking report as JSON to this file
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    /// Only print the report; no masked text is written
    #[arg(long)]
    pub dry_run: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration");
                eprintln!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let options = self.resolve_options(config.anonymization);
        let format = self.report_format.unwrap_or(config.output.report_format);

        let text = self.read_input()?;
        if text.trim().is_empty() {
            let err = MascaraError::EmptyInput;
            tracing::warn!("Empty input, nothing to anonymize");
            eprintln!("{err}");
            return Ok(err.exit_code());
        }

        tracing::info!(
            input = %self.input_label(),
            names_enabled = options.anonymize_names,
            dry_run = self.dry_run,
            "Anonymizing text"
        );

        let outcome = AnonymizationEngine::shared().anonymize_with_report(&text, &options);
        log_mask_summary!(&outcome.report);
        if !outcome.report.has_masks() {
            tracing::info!("No PII found in input");
        }

        if let Some(path) = &self.report_file {
            outcome
                .report
                .write_to_file(path)
                .with_context(|| format!("Failed to write report file: {}", path.display()))?;
            tracing::info!(report_file = %path.display(), "Report saved");
        }

        if self.dry_run {
            let rendered = render_report(&outcome.report, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            return Ok(0);
        }

        self.write_output(&outcome.text)?;

        if self.report {
            eprint!("{}", render_report(&outcome.report, format)?);
        }

        Ok(0)
    }

    /// Combine the configured options with the command-line flags
    fn resolve_options(&self, configured: AnonymizationOptions) -> AnonymizationOptions {
        let mut options = configured;
        if self.names {
            options.anonymize_names = true;
        }
        if self.no_names {
            options.anonymize_names = false;
        }
        options
    }

    fn input_label(&self) -> String {
        self.input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read text from stdin")?;
                Ok(buffer)
            }
        }
    }

    fn write_output(&self, text: &str) -> anyhow::Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, text)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                tracing::info!(output = %path.display(), "Masked text written");
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn render_report(report: &MaskReport, format: ReportFormat) -> anyhow::Result<String> {
    Ok(match format {
        ReportFormat::Console => report.format_console(),
        ReportFormat::Json => format!("{}\n", report.format_json()?),
    })
}
