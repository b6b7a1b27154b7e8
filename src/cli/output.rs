use crate::case::Convention;
use crate::Conversion;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    convention: String,
    total: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_conversions(conversions: &[Conversion], convention: Convention, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_conversions(conversions),
        OutputFormat::Json => print_json_conversions(conversions, convention),
    }
}

// Text output stays plain so it can be piped into other tools.
fn print_text_conversions(conversions: &[Conversion]) {
    for conversion in conversions {
        println!("{}", conversion.output);
    }
}

fn print_json_conversions(conversions: &[Conversion], convention: Convention) {
    let json_conversions: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: c.output.clone(),
        })
        .collect();

    let output = JsonOutput {
        convention: convention.to_string(),
        total: json_conversions.len(),
        conversions: json_conversions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_conventions(colored_output: bool) {
    const SAMPLE: &str = "hello world";

    if colored_output {
        println!("{}", "Supported conventions:".bold());
    } else {
        println!("Supported conventions:");
    }
    println!();

    for convention in Convention::ALL {
        let name = format!("{:<9}", convention.name());
        let rendered = convention.apply(SAMPLE, None);

        if colored_output {
            println!("  {} {}", name.cyan().bold(), rendered.dimmed());
        } else {
            println!("  {} {}", name, rendered);
        }
    }
}
