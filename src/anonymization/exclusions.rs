//! Words the name pass must never mask
//!
//! Portuguese month names and honorifics are capitalized like proper names
//! but carry no identifying information.

use std::collections::HashSet;
use std::sync::LazyLock;

const DEFAULT_EXCLUDED_WORDS: [&str; 14] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
    "Doutor",
    "Dra",
];

static DEFAULT_EXCLUSIONS: LazyLock<ExclusionList> =
    LazyLock::new(|| ExclusionList::from_words(DEFAULT_EXCLUDED_WORDS));

/// Immutable set of words compared by exact, case-sensitive match
#[derive(Debug, Clone)]
pub struct ExclusionList {
    words: HashSet<&'static str>,
}

impl ExclusionList {
    /// Build a list from a fixed set of words
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// The built-in list, constructed once per process
    pub fn default_list() -> &'static ExclusionList {
        &DEFAULT_EXCLUSIONS
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}
