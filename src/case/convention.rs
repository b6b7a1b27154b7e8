use super::{
    camel_case, constant_case, dot_case, kebab_case, pascal_case, path_case, sentence_case,
    snake_case, title_case, CaseRules,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named casing convention: a delimiter plus a default per-word transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
    Dot,
    Path,
}

#[derive(Debug, Error)]
#[error(
    "unknown convention '{0}', expected one of: \
     title, sentence, camel, pascal, snake, kebab, constant, dot, path"
)]
pub struct UnknownConvention(String);

impl Convention {
    pub const ALL: [Convention; 9] = [
        Convention::Title,
        Convention::Sentence,
        Convention::Camel,
        Convention::Pascal,
        Convention::Snake,
        Convention::Kebab,
        Convention::Constant,
        Convention::Dot,
        Convention::Path,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Convention::Title => "title",
            Convention::Sentence => "sentence",
            Convention::Camel => "camel",
            Convention::Pascal => "pascal",
            Convention::Snake => "snake",
            Convention::Kebab => "kebab",
            Convention::Constant => "constant",
            Convention::Dot => "dot",
            Convention::Path => "path",
        }
    }

    /// Convert a phrase under this convention.
    pub fn apply(self, input: &str, rules: Option<&CaseRules>) -> String {
        match self {
            Convention::Title => title_case(input, rules),
            Convention::Sentence => sentence_case(input, rules),
            Convention::Camel => camel_case(input, rules),
            Convention::Pascal => pascal_case(input, rules),
            Convention::Snake => snake_case(input, rules),
            Convention::Kebab => kebab_case(input, rules),
            Convention::Constant => constant_case(input, rules),
            Convention::Dot => dot_case(input, rules),
            Convention::Path => path_case(input, rules),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(Convention::Title),
            "sentence" => Ok(Convention::Sentence),
            "camel" => Ok(Convention::Camel),
            "pascal" => Ok(Convention::Pascal),
            "snake" => Ok(Convention::Snake),
            "kebab" => Ok(Convention::Kebab),
            "constant" => Ok(Convention::Constant),
            "dot" => Ok(Convention::Dot),
            "path" => Ok(Convention::Path),
            _ => Err(UnknownConvention(s.to_string())),
        }
    }
}
