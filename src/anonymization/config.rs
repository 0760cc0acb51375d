//! Anonymization options

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Per-invocation options for the masking pipeline
///
/// CPF, CNPJ, email and phone masking always run. Only name masking is
/// optional, and it is off unless explicitly enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationOptions {
    /// Mask capitalized words that look like proper names
    #[serde(default)]
    pub anonymize_names: bool,
}

impl AnonymizationOptions {
    /// Options with name masking enabled
    pub fn with_names() -> Self {
        Self {
            anonymize_names: true,
        }
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_ANONYMIZE_NAMES") {
            self.anonymize_names = val
                .parse()
                .context("Invalid MASCARA_ANONYMIZATION_ANONYMIZE_NAMES value")?;
        }

        Ok(())
    }
}
