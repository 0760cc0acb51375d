//! Phone number masking

use super::{fancy_matches, splice, Edit, MaskingPass, PassOutput};
use crate::anonymization::cleaner::digits_only;
use crate::anonymization::models::PiiCategory;
use crate::domain::Result;
use fancy_regex::Regex;

/// Optional area code `11` or `(11)` with an optional space, then 4-5 digits,
/// an optional `-`, `.` or space, and 4 digits.
const PHONE_PATTERN: &str =
    r"(?<![\w(])(?:(?:\([0-9]{2}\)|[0-9]{2}) ?)?[0-9]{4,5}[-. ]?[0-9]{4}(?!\w)";

/// Masks phone numbers as `(DD) *****-LLLL`
pub struct PhoneMask {
    regex: Regex,
}

impl PhoneMask {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(PHONE_PATTERN)?,
        })
    }

    /// Masked form of one candidate, or `None` unless it holds 10 or 11 digits
    pub fn mask_value(candidate: &str) -> Option<String> {
        let digits = digits_only(candidate);
        if !matches!(digits.len(), 10 | 11) {
            return None;
        }
        Some(format!(
            "({}) *****-{}",
            &digits[..2],
            &digits[digits.len() - 4..]
        ))
    }
}

impl MaskingPass for PhoneMask {
    fn category(&self) -> PiiCategory {
        PiiCategory::Phone
    }

    fn mask(&self, text: &str) -> PassOutput {
        let edits = fancy_matches(&self.regex, text, self.category())
            .into_iter()
            .map(|(start, end)| Edit {
                start,
                end,
                replacement: Self::mask_value(&text[start..end]),
            });
        splice(text, edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("(11) 91234-5678", "(11) *****-5678" ; "mobile with parenthesized area code")]
    #[test_case("(11)91234-5678", "(11) *****-5678" ; "no space after area code")]
    #[test_case("11 91234-5678", "(11) *****-5678" ; "bare area code")]
    #[test_case("(21) 3456-7890", "(21) *****-7890" ; "landline")]
    #[test_case("21 3456.7890", "(21) *****-7890" ; "period separator")]
    #[test_case("2134567890", "(21) *****-7890" ; "ten bare digits")]
    #[test_case("tel (11) 91234-5678.", "tel (11) *****-5678." ; "inside sentence")]
    fn test_phone_masked(input: &str, expected: &str) {
        let pass = PhoneMask::new().unwrap();
        assert_eq!(pass.mask(input).text, expected);
    }

    #[test_case("91234-5678" ; "no area code")]
    #[test_case("3456-7890" ; "eight digits")]
    fn test_short_numbers_untouched(input: &str) {
        let pass = PhoneMask::new().unwrap();
        let output = pass.mask(input);
        assert_eq!(output.text, input);
        assert_eq!(output.masked, 0);
        assert_eq!(output.untouched, 1);
    }

    #[test_case("ligue (2134567890) hoje" ; "whole number in parentheses")]
    #[test_case("ligue (21 3456-7890" ; "unclosed area code")]
    #[test_case("ligue 21) 3456-7890" ; "unopened area code")]
    fn test_unbalanced_parentheses_untouched(input: &str) {
        let pass = PhoneMask::new().unwrap();
        let output = pass.mask(input);
        assert_eq!(output.text, input);
        assert_eq!(output.masked, 0);
    }

    #[test]
    fn test_not_part_of_longer_token() {
        let pass = PhoneMask::new().unwrap();
        let output = pass.mask("ref x2134567890 and 2134567890123");
        assert_eq!(output.text, "ref x2134567890 and 2134567890123");
        assert_eq!(output.masked, 0);
    }

    #[test]
    fn test_mask_value() {
        assert_eq!(
            PhoneMask::mask_value("(11) 91234-5678").as_deref(),
            Some("(11) *****-5678")
        );
        assert_eq!(PhoneMask::mask_value("1234-5678"), None);
        assert_eq!(PhoneMask::mask_value(""), None);
    }

    #[test]
    fn test_multiple_phones() {
        let pass = PhoneMask::new().unwrap();
        let output = pass.mask("(11) 91234-5678 ou (21) 3456-7890");
        assert_eq!(output.text, "(11) *****-5678 ou (21) *****-7890");
        assert_eq!(output.masked, 2);
    }
}
