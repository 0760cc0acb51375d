//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that runs the masking
//! passes over a text in their fixed order.
//!
//! # Pipeline
//!
//! ```text
//! text → CPF → CNPJ → email → phone → [names] → masked text
//! ```
//!
//! The name pass only runs when [`AnonymizationOptions::anonymize_names`] is set.
//!
//! # Examples
//!
//! ```
//! use mascara::anonymization::{AnonymizationEngine, AnonymizationOptions};
//!
//! # fn example() -> mascara::domain::Result<()> {
//! let engine = AnonymizationEngine::new()?;
//! let outcome = engine.anonymize_with_report(
//!     "CPF 123.456.789-09, Ana",
//!     &AnonymizationOptions::with_names(),
//! );
//! assert_eq!(outcome.text, "CPF ***.456.789-**, A*");
//! assert_eq!(outcome.report.total_masked, 2);
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    config::AnonymizationOptions,
    masker::{CnpjMask, CpfMask, EmailMask, MaskingPass, NameMask, PhoneMask},
    report::MaskReport,
};
use crate::domain::Result;
use std::sync::LazyLock;
use std::time::Instant;

static SHARED_ENGINE: LazyLock<AnonymizationEngine> = LazyLock::new(|| {
    AnonymizationEngine::new().expect("built-in masking patterns must compile")
});

/// Masked text together with the run's report
#[derive(Debug, Clone)]
pub struct MaskOutcome {
    pub text: String,
    pub report: MaskReport,
}

/// Main anonymization engine
///
/// Holds the compiled passes and nothing else, so one engine can serve any
/// number of threads and invocations. Options are supplied per call.
pub struct AnonymizationEngine {
    passes: Vec<Box<dyn MaskingPass>>,
    name_pass: Box<dyn MaskingPass>,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns [`MascaraError::Pattern`](crate::domain::MascaraError::Pattern)
    /// if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        let passes: Vec<Box<dyn MaskingPass>> = vec![
            Box::new(CpfMask::new()?),
            Box::new(CnpjMask::new()?),
            Box::new(EmailMask::new()?),
            Box::new(PhoneMask::new()?),
        ];

        Ok(Self {
            passes,
            name_pass: Box::new(NameMask::new()?),
        })
    }

    /// Process-wide engine, built on first use
    pub fn shared() -> &'static AnonymizationEngine {
        &SHARED_ENGINE
    }

    /// Mask all PII in `text`
    pub fn anonymize(&self, text: &str, options: &AnonymizationOptions) -> String {
        self.anonymize_with_report(text, options).text
    }

    /// Mask all PII in `text` and report what each pass did
    pub fn anonymize_with_report(&self, text: &str, options: &AnonymizationOptions) -> MaskOutcome {
        let start = Instant::now();
        let mut report = MaskReport::new(options.anonymize_names, text.chars().count());
        let mut current = text.to_string();

        for pass in self.active_passes(options) {
            let output = pass.mask(&current);
            tracing::trace!(
                category = %pass.category(),
                masked = output.masked,
                untouched = output.untouched,
                "Pass complete"
            );
            report.record_pass(pass.category(), &output);
            current = output.text;
        }

        report.finish(current.chars().count(), start.elapsed());

        tracing::debug!(
            total_masked = report.total_masked,
            total_untouched = report.total_untouched,
            names_enabled = options.anonymize_names,
            processing_time_us = report.processing_time_us,
            "Anonymization complete"
        );

        MaskOutcome {
            text: current,
            report,
        }
    }

    fn active_passes<'a>(
        &'a self,
        options: &AnonymizationOptions,
    ) -> impl Iterator<Item = &'a dyn MaskingPass> {
        let names = options.anonymize_names.then_some(self.name_pass.as_ref());
        self.passes.iter().map(|p| p.as_ref()).chain(names)
    }
}

/// Mask all PII in `text` using the shared engine
///
/// # Examples
///
/// ```
/// use mascara::{anonymize_text, AnonymizationOptions};
///
/// let masked = anonymize_text("tel (11) 91234-5678", &AnonymizationOptions::default());
/// assert_eq!(masked, "tel (11) *****-5678");
/// ```
pub fn anonymize_text(text: &str, options: &AnonymizationOptions) -> String {
    AnonymizationEngine::shared().anonymize(text, options)
}
