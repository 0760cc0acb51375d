//! PII category model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of PII the pipeline masks, in the order the passes run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// Brazilian individual taxpayer number (11 digits)
    Cpf,
    /// Brazilian business registry number (14 digits)
    Cnpj,
    /// Email addresses
    Email,
    /// Telephone numbers with area code
    Phone,
    /// Capitalized words treated as proper names
    Name,
}

impl PiiCategory {
    /// All categories in pipeline order
    pub const ALL: [PiiCategory; 5] = [
        Self::Cpf,
        Self::Cnpj,
        Self::Email,
        Self::Phone,
        Self::Name,
    ];

    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Name => "NAME",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
