//! Masking reports
//!
//! A [`MaskReport`] summarizes one pipeline run: how many matches each pass
//! masked, how many near-matches it left alone, and how long it took. It never
//! holds any part of the input text.

use crate::anonymization::masker::PassOutput;
use crate::anonymization::models::PiiCategory;
use crate::domain::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Summary of one anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskReport {
    /// Whether the name pass ran
    pub names_enabled: bool,

    /// Matches masked, by category
    pub masked_by_category: BTreeMap<PiiCategory, usize>,

    /// Near-matches left unchanged, by category
    pub untouched_by_category: BTreeMap<PiiCategory, usize>,

    /// Total matches masked
    pub total_masked: usize,

    /// Total near-matches left unchanged
    pub total_untouched: usize,

    /// Input length in characters
    pub input_chars: usize,

    /// Output length in characters
    pub output_chars: usize,

    /// Wall-clock time spent in the pipeline (microseconds)
    pub processing_time_us: u64,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl MaskReport {
    /// Create an empty report for an input of `input_chars` characters
    pub fn new(names_enabled: bool, input_chars: usize) -> Self {
        Self {
            names_enabled,
            masked_by_category: BTreeMap::new(),
            untouched_by_category: BTreeMap::new(),
            total_masked: 0,
            total_untouched: 0,
            input_chars,
            output_chars: input_chars,
            processing_time_us: 0,
            generated_at: Utc::now(),
        }
    }

    /// Record the outcome of one pass
    pub fn record_pass(&mut self, category: PiiCategory, output: &PassOutput) {
        *self.masked_by_category.entry(category).or_insert(0) += output.masked;
        *self.untouched_by_category.entry(category).or_insert(0) += output.untouched;
        self.total_masked += output.masked;
        self.total_untouched += output.untouched;
    }

    /// Close the report once the last pass has run
    pub fn finish(&mut self, output_chars: usize, elapsed: Duration) {
        self.output_chars = output_chars;
        self.processing_time_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    }

    /// Matches masked for one category
    pub fn masked(&self, category: PiiCategory) -> usize {
        self.masked_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Near-matches left unchanged for one category
    pub fn untouched(&self, category: PiiCategory) -> usize {
        self.untouched_by_category
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    /// Check if anything was masked
    pub fn has_masks(&self) -> bool {
        self.total_masked > 0
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    ANONYMIZATION REPORT                       \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Total Masked:            {}\n", self.total_masked));
        output.push_str(&format!(
            "  Near-matches Kept:       {}\n",
            self.total_untouched
        ));
        output.push_str(&format!(
            "  Name Masking:            {}\n",
            if self.names_enabled {
                "enabled"
            } else {
                "disabled"
            }
        ));
        output.push_str(&format!(
            "  Characters In / Out:     {} / {}\n",
            self.input_chars, self.output_chars
        ));
        output.push_str(&format!(
            "  Processing Time:         {} µs\n",
            self.processing_time_us
        ));
        output.push('\n');

        output.push_str("🔍 MATCHES BY CATEGORY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  {:10} {:>8} {:>8}\n", "", "masked", "kept"));
        for category in PiiCategory::ALL {
            if category == PiiCategory::Name && !self.names_enabled {
                output.push_str(&format!("  {:10} {:>8} {:>8}\n", category.label(), "-", "-"));
                continue;
            }
            output.push_str(&format!(
                "  {:10} {:>8} {:>8}\n",
                category.label(),
                self.masked(category),
                self.untouched(category)
            ));
        }
        output.push('\n');

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.format_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
