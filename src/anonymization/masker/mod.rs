//! Masking passes
//!
//! Each pass scans the whole text left to right, replaces every
//! non-overlapping match it accepts and returns a new string. Passes share no
//! state and never fail: a candidate that does not validate is copied through
//! unchanged.

pub mod document;
pub mod email;
pub mod name;
pub mod phone;

pub use document::{CnpjMask, CpfMask};
pub use email::EmailMask;
pub use name::NameMask;
pub use phone::PhoneMask;

use crate::anonymization::models::PiiCategory;

/// Trait for masking pass implementations
pub trait MaskingPass: Send + Sync {
    /// Category of PII this pass masks
    fn category(&self) -> PiiCategory;

    /// Mask every match in `text`
    fn mask(&self, text: &str) -> PassOutput;
}

/// Result of running one pass over a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutput {
    /// Transformed text
    pub text: String,
    /// Matches replaced by their masked form
    pub masked: usize,
    /// Matches copied through because they did not validate
    pub untouched: usize,
}

/// A matched byte range and what to put in its place
///
/// `replacement: None` keeps the original slice.
#[derive(Debug)]
pub(crate) struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: Option<String>,
}

/// Apply ordered, non-overlapping edits to `text`
pub(crate) fn splice<I>(text: &str, edits: I) -> PassOutput
where
    I: IntoIterator<Item = Edit>,
{
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    let mut masked = 0;
    let mut untouched = 0;

    for edit in edits {
        output.push_str(&text[last..edit.start]);
        match edit.replacement {
            Some(replacement) => {
                output.push_str(&replacement);
                masked += 1;
            }
            None => {
                output.push_str(&text[edit.start..edit.end]);
                untouched += 1;
            }
        }
        last = edit.end;
    }
    output.push_str(&text[last..]);

    PassOutput {
        text: output,
        masked,
        untouched,
    }
}

/// Collect match ranges from a backtracking pattern
///
/// A scan that hits the backtracking limit stops there; the rest of the text
/// is left as it is.
pub(crate) fn fancy_matches(
    regex: &fancy_regex::Regex,
    text: &str,
    category: PiiCategory,
) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    for found in regex.find_iter(text) {
        match found {
            Ok(m) => ranges.push((m.start(), m.end())),
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    error = %e,
                    matches_before_abort = ranges.len(),
                    "Pattern scan aborted"
                );
                break;
            }
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_without_edits() {
        let output = splice("nothing to see", Vec::new());
        assert_eq!(output.text, "nothing to see");
        assert_eq!(output.masked, 0);
        assert_eq!(output.untouched, 0);
    }

    #[test]
    fn test_splice_mixed_edits() {
        let text = "a 111 b 222 c";
        let edits = vec![
            Edit {
                start: 2,
                end: 5,
                replacement: Some("***".to_string()),
            },
            Edit {
                start: 8,
                end: 11,
                replacement: None,
            },
        ];

        let output = splice(text, edits);
        assert_eq!(output.text, "a *** b 222 c");
        assert_eq!(output.masked, 1);
        assert_eq!(output.untouched, 1);
    }

    #[test]
    fn test_splice_replacement_changes_length() {
        let edits = vec![Edit {
            start: 0,
            end: 5,
            replacement: Some("J*".to_string()),
        }];
        let output = splice("Julia!", edits);
        assert_eq!(output.text, "J*!");
    }

    #[test]
    fn test_fancy_matches_ranges() {
        let regex = fancy_regex::Regex::new(r"(?<![0-9])[0-9]{2}(?![0-9])").unwrap();
        let ranges = fancy_matches(&regex, "ab 12 345 67", PiiCategory::Phone);
        assert_eq!(ranges, vec![(3, 5), (10, 12)]);
    }
}
