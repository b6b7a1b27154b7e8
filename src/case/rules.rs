use super::word;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-word override rules applied before a convention's default transform.
///
/// Words are matched by exact string equality. Each list defaults to empty,
/// and rule sets are read-only for the duration of a call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseRules {
    #[serde(default)]
    pub always_capitalize: Vec<String>,

    #[serde(default)]
    pub always_lowercase: Vec<String>,

    #[serde(default)]
    pub always_uppercase: Vec<String>,

    #[serde(default)]
    pub never_transform: Vec<String>,
}

impl CaseRules {
    pub fn is_empty(&self) -> bool {
        self.always_capitalize.is_empty()
            && self.always_lowercase.is_empty()
            && self.always_uppercase.is_empty()
            && self.never_transform.is_empty()
    }
}

/// Call-scoped set view of [`CaseRules`] for O(1) membership checks.
pub(crate) struct RuleSets<'a> {
    always_capitalize: HashSet<&'a str>,
    always_lowercase: HashSet<&'a str>,
    always_uppercase: HashSet<&'a str>,
    never_transform: HashSet<&'a str>,
}

impl<'a> From<&'a CaseRules> for RuleSets<'a> {
    fn from(rules: &'a CaseRules) -> Self {
        let as_set = |words: &'a [String]| words.iter().map(String::as_str).collect();
        Self {
            always_capitalize: as_set(&rules.always_capitalize),
            always_lowercase: as_set(&rules.always_lowercase),
            always_uppercase: as_set(&rules.always_uppercase),
            never_transform: as_set(&rules.never_transform),
        }
    }
}

impl RuleSets<'_> {
    /// Apply the first matching rule category to a word.
    ///
    /// Categories are checked in fixed priority order: capitalize, then
    /// lowercase, then uppercase, then never-transform. Returns `None` when
    /// no category contains the word.
    pub(crate) fn apply(&self, word: &str) -> Option<String> {
        if self.always_capitalize.contains(word) {
            return Some(word::capitalize(word));
        }
        if self.always_lowercase.contains(word) {
            return Some(word.to_lowercase());
        }
        if self.always_uppercase.contains(word) {
            return Some(word.to_uppercase());
        }
        if self.never_transform.contains(word) {
            return Some(word.to_string());
        }
        None
    }
}
