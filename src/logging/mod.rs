//! Logging and observability
//!
//! Structured logging through `tracing`, with a stderr console layer and an
//! optional rotating JSON file layer. Log events carry counts, lengths and
//! categories only; input text and matched values are never logged.
//!
//! # Example
//!
//! ```no_run
//! use mascara::logging::init_logging;
//! use mascara::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of an anonymization run from its report
///
/// # Example
///
/// ```no_run
/// use mascara::log_mask_summary;
/// use mascara::anonymization::MaskReport;
///
/// let report = MaskReport::new(false, 120);
/// log_mask_summary!(&report);
/// ```
#[macro_export]
macro_rules! log_mask_summary {
    ($report:expr) => {
        tracing::info!(
            masked = $report.total_masked,
            untouched = $report.total_untouched,
            names_enabled = $report.names_enabled,
            input_chars = $report.input_chars,
            output_chars = $report.output_chars,
            duration_us = $report.processing_time_us,
            "Text anonymized"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mascara::log_error_with_context;
/// use mascara::domain::MascaraError;
///
/// let error = MascaraError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
