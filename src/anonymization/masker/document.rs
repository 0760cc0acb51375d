//! CPF and CNPJ masking
//!
//! Both numbers are accepted grouped (`123.456.789-09`, `11.222.333/0001-81`)
//! or as a bare digit run. Every separator is optional on its own, so mixed
//! forms such as `123.456789-09` also match.

use super::{splice, Edit, MaskingPass, PassOutput};
use crate::anonymization::cleaner::clean_document;
use crate::anonymization::models::PiiCategory;
use crate::domain::Result;
use regex::Regex;

const CPF_PATTERN: &str = r"\b[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}\b";
const CNPJ_PATTERN: &str = r"\b[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}\b";

const CPF_DIGITS: usize = 11;
const CNPJ_DIGITS: usize = 14;

/// Clean a candidate and return its digits if exactly `len` remain
fn cleaned_digits(candidate: &str, len: usize) -> Option<String> {
    let cleaned = clean_document(candidate);
    (cleaned.len() == len && cleaned.bytes().all(|b| b.is_ascii_digit())).then_some(cleaned)
}

fn mask_with(regex: &Regex, text: &str, render: fn(&str) -> Option<String>) -> PassOutput {
    let edits = regex.find_iter(text).map(|m| Edit {
        start: m.start(),
        end: m.end(),
        replacement: render(m.as_str()),
    });
    splice(text, edits)
}

/// Masks CPF numbers as `***.DDD.DDD-**`
pub struct CpfMask {
    regex: Regex,
}

impl CpfMask {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(CPF_PATTERN)?,
        })
    }

    /// Masked form of one candidate, or `None` if it is not 11 digits once cleaned
    pub fn mask_value(candidate: &str) -> Option<String> {
        let digits = cleaned_digits(candidate, CPF_DIGITS)?;
        Some(format!("***.{}.{}-**", &digits[3..6], &digits[6..9]))
    }
}

impl MaskingPass for CpfMask {
    fn category(&self) -> PiiCategory {
        PiiCategory::Cpf
    }

    fn mask(&self, text: &str) -> PassOutput {
        mask_with(&self.regex, text, Self::mask_value)
    }
}

/// Masks CNPJ numbers as `**.***.DDD/DDDD-**`
pub struct CnpjMask {
    regex: Regex,
}

impl CnpjMask {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(CNPJ_PATTERN)?,
        })
    }

    /// Masked form of one candidate, or `None` if it is not 14 digits once cleaned
    pub fn mask_value(candidate: &str) -> Option<String> {
        let digits = cleaned_digits(candidate, CNPJ_DIGITS)?;
        Some(format!("**.***.{}/{}-**", &digits[5..8], &digits[8..12]))
    }
}

impl MaskingPass for CnpjMask {
    fn category(&self) -> PiiCategory {
        PiiCategory::Cnpj
    }

    fn mask(&self, text: &str) -> PassOutput {
        mask_with(&self.regex, text, Self::mask_value)
    }
}
