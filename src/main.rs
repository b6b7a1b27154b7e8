use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::case::Convention;
use recase::cli::output::{self, OutputFormat};
use recase::{Config, Conversion};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert phrases between casing conventions", long_about = None)]
struct Cli {
    /// Phrases to convert (reads standard input when omitted)
    #[arg(value_name = "PHRASES")]
    phrases: Vec<String>,

    /// Target convention (title, sentence, camel, pascal, snake, kebab, constant, dot, path)
    #[arg(short, long, value_name = "CONVENTION")]
    to: Option<Convention>,

    /// Words to always capitalize, overriding the convention
    #[arg(long, value_name = "WORD")]
    always_capitalize: Vec<String>,

    /// Words to always lowercase, overriding the convention
    #[arg(long, value_name = "WORD")]
    always_lowercase: Vec<String>,

    /// Words to always uppercase, overriding the convention
    #[arg(long, value_name = "WORD")]
    always_uppercase: Vec<String>,

    /// Words to pass through untouched
    #[arg(long, value_name = "WORD")]
    never_transform: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List supported conventions with sample output
    Conventions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, !cli.no_color);
    }

    // Load configuration
    let config = Config::load(
        cli.to,
        cli.always_capitalize.clone(),
        cli.always_lowercase.clone(),
        cli.always_uppercase.clone(),
        cli.never_transform.clone(),
    )?;

    let phrases = if cli.phrases.is_empty() {
        read_stdin_phrases()?
    } else {
        cli.phrases.clone()
    };

    // An empty rule set must behave exactly like no rules at all; the two
    // are distinguishable through sentence case.
    let rules = (!config.rules.is_empty()).then_some(&config.rules);

    let conversions: Vec<Conversion> = phrases
        .iter()
        .map(|phrase| Conversion {
            input: phrase.clone(),
            output: config.convention.apply(phrase, rules),
        })
        .collect();

    output::print_conversions(&conversions, config.convention, &cli.format);

    Ok(())
}

fn read_stdin_phrases() -> Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read standard input")?;

    let phrases: Vec<String> = buffer.lines().map(str::to_string).collect();
    if phrases.is_empty() {
        anyhow::bail!("No phrases given. Pass phrases as arguments or pipe them to stdin.");
    }

    Ok(phrases)
}

fn handle_command(command: Commands, colored: bool) -> Result<()> {
    match command {
        Commands::Conventions => {
            output::print_conventions(colored);
        }
    }
    Ok(())
}
