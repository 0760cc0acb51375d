//! Configuration management for Mascara.
//!
//! Mascara reads an optional TOML file (default `mascara.toml`) with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MASCARA_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! anonymize_names = true
//!
//! [output]
//! report_format = "console"
//!
//! [logging]
//! local_enabled = true
//! local_path = "${MASCARA_LOG_DIR}"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use mascara::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("mascara.toml")?;
//! println!("Names masked: {}", config.anonymization.anonymize_names);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, MascaraConfig, OutputConfig, ReportFormat};
