//! Email masking

use super::{splice, Edit, MaskingPass, PassOutput};
use crate::anonymization::models::PiiCategory;
use crate::domain::Result;
use regex::{Captures, Regex};

// Greedy groups: in `a@mail.empresa.com.br` the domain is `mail.empresa.com`
// and the extension is `br`.
const EMAIL_PATTERN: &str = r"(?i)([a-z0-9._-]+)@([a-z0-9._-]+)\.([a-z0-9_.-]+)";

/// Masks `local@domain.ext` as `l*@d*.ext`
pub struct EmailMask {
    regex: Regex,
}

impl EmailMask {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(EMAIL_PATTERN)?,
        })
    }

    fn render(caps: &Captures<'_>) -> Option<String> {
        let user = caps.get(1)?.as_str().chars().next()?;
        let domain = caps.get(2)?.as_str().chars().next()?;
        let extension = caps.get(3)?.as_str();
        Some(format!("{user}*@{domain}*.{extension}"))
    }
}

impl MaskingPass for EmailMask {
    fn category(&self) -> PiiCategory {
        PiiCategory::Email
    }

    fn mask(&self, text: &str) -> PassOutput {
        let edits = self.regex.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Edit {
                start: whole.start(),
                end: whole.end(),
                replacement: Self::render(&caps),
            })
        });
        splice(text, edits)
    }
}
