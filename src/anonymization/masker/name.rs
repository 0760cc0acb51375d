//! Proper name masking
//!
//! Purely lexical: any capitalized word bounded by whitespace or punctuation
//! is treated as a name, so sentence-initial words are masked too. Only the
//! exclusion list protects a word.

use super::{fancy_matches, splice, Edit, MaskingPass, PassOutput};
use crate::anonymization::exclusions::ExclusionList;
use crate::anonymization::models::PiiCategory;
use crate::domain::Result;
use fancy_regex::Regex;

/// One uppercase Latin letter (accents included) followed by lowercase letters,
/// neither preceded nor followed by anything but whitespace, string edges or
/// the listed punctuation. An apostrophe only counts as part of the token when
/// a lowercase letter follows it, so a closing quote stays a boundary.
const NAME_PATTERN: &str = r#"(?<![^\s.,;:!?()\[\]{}"'«»“”‘’/\-])[A-ZÀ-ÖØ-Þ](?:[a-zß-öø-ÿ]|'(?=[a-zß-öø-ÿ]))+(?![^\s.,;:!?()\[\]{}"'«»“”‘’/\-])"#;

/// Masks capitalized words as their first letter followed by `*`
pub struct NameMask {
    regex: Regex,
    exclusions: &'static ExclusionList,
}

impl NameMask {
    /// Create a name pass using the built-in exclusion list
    pub fn new() -> Result<Self> {
        Self::with_exclusions(ExclusionList::default_list())
    }

    pub fn with_exclusions(exclusions: &'static ExclusionList) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(NAME_PATTERN)?,
            exclusions,
        })
    }

    fn render(&self, token: &str) -> Option<String> {
        if self.exclusions.contains(token) {
            return None;
        }
        let first = token.chars().next()?;
        Some(format!("{first}*"))
    }
}

impl MaskingPass for NameMask {
    fn category(&self) -> PiiCategory {
        PiiCategory::Name
    }

    fn mask(&self, text: &str) -> PassOutput {
        let edits = fancy_matches(&self.regex, text, self.category())
            .into_iter()
            .map(|(start, end)| Edit {
                start,
                end,
                replacement: self.render(&text[start..end]),
            });
        splice(text, edits)
    }
}
