pub mod convention;
pub mod rules;
pub mod word;

pub use convention::{Convention, UnknownConvention};
pub use rules::CaseRules;

use rules::RuleSets;
use word::capitalize;

// Every conversion shares one pipeline: split the phrase on single spaces,
// transform each word (override rules first, then the convention's default,
// which may depend on the zero-based word index), and rejoin with the
// convention's delimiter. Splitting on ' ' keeps empty "words" for
// consecutive, leading, and trailing spaces, so those surface as stray
// delimiters in the output; that quirk is intentional and pinned by tests.
fn convert<F>(input: &str, delimiter: &str, rules: Option<&CaseRules>, transform: F) -> String
where
    F: Fn(&str, usize, Option<&RuleSets>) -> String,
{
    let sets = rules.map(RuleSets::from);
    input
        .split(' ')
        .enumerate()
        .map(|(index, word)| transform(word, index, sets.as_ref()))
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn delimited_lowercase(input: &str, delimiter: &str, rules: Option<&CaseRules>) -> String {
    convert(input, delimiter, rules, |word, _, sets| {
        sets.and_then(|s| s.apply(word))
            .unwrap_or_else(|| word.to_lowercase())
    })
}

/// Converts a phrase to Title Case.
///
/// # Examples
///
/// ```
/// use recase::title_case;
///
/// assert_eq!(title_case("hello world", None), "Hello World");
/// assert_eq!(title_case("HeLLo WoRLD", None), "Hello World");
/// ```
pub fn title_case(input: &str, rules: Option<&CaseRules>) -> String {
    convert(input, " ", rules, |word, _, sets| {
        sets.and_then(|s| s.apply(word))
            .unwrap_or_else(|| capitalize(word))
    })
}

/// Converts a phrase to Sentence case.
///
/// Override rules are matched against the lowercased word, unlike the other
/// conversions. The first word is capitalized after any rule applies; with
/// rules present, later words that match no rule pass through unchanged.
pub fn sentence_case(input: &str, rules: Option<&CaseRules>) -> String {
    convert(input, " ", rules, |word, index, sets| {
        let matched = sets.and_then(|s| s.apply(&word.to_lowercase()));
        if index == 0 {
            capitalize(matched.as_deref().unwrap_or(word))
        } else if sets.is_some() {
            matched.unwrap_or_else(|| word.to_string())
        } else {
            word.to_lowercase()
        }
    })
}

/// Converts a phrase to camelCase.
///
/// The first word is lowercased whole regardless of content or rules.
///
/// # Examples
///
/// ```
/// use recase::camel_case;
///
/// assert_eq!(camel_case("hello world", None), "helloWorld");
/// ```
pub fn camel_case(input: &str, rules: Option<&CaseRules>) -> String {
    convert(input, "", rules, |word, index, sets| {
        if index == 0 {
            word.to_lowercase()
        } else {
            sets.and_then(|s| s.apply(word))
                .unwrap_or_else(|| capitalize(word))
        }
    })
}

/// Converts a phrase to PascalCase.
pub fn pascal_case(input: &str, rules: Option<&CaseRules>) -> String {
    convert(input, "", rules, |word, _, sets| {
        sets.and_then(|s| s.apply(word))
            .unwrap_or_else(|| capitalize(word))
    })
}

/// Converts a phrase to snake_case.
pub fn snake_case(input: &str, rules: Option<&CaseRules>) -> String {
    delimited_lowercase(input, "_", rules)
}

/// Converts a phrase to kebab-case.
pub fn kebab_case(input: &str, rules: Option<&CaseRules>) -> String {
    delimited_lowercase(input, "-", rules)
}

/// Converts a phrase to CONSTANT_CASE.
pub fn constant_case(input: &str, rules: Option<&CaseRules>) -> String {
    convert(input, "_", rules, |word, _, sets| {
        sets.and_then(|s| s.apply(word))
            .unwrap_or_else(|| word.to_uppercase())
    })
}

/// Converts a phrase to dot.case.
pub fn dot_case(input: &str, rules: Option<&CaseRules>) -> String {
    delimited_lowercase(input, ".", rules)
}

/// Converts a phrase to path/case.
pub fn path_case(input: &str, rules: Option<&CaseRules>) -> String {
    delimited_lowercase(input, "/", rules)
}
