pub mod case;
pub mod cli;
pub mod config;

pub use case::{
    camel_case, constant_case, dot_case, kebab_case, pascal_case, path_case, sentence_case,
    snake_case, title_case,
};
pub use case::{CaseRules, Convention};
pub use config::Config;

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}
