//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated copy
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted text output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for oathwright
#[derive(Parser, Debug)]
#[command(name = "oathwright")]
#[command(author, version, about = "AI copy generator for the OATH copywriting formula")]
#[command(long_about = r#"
Oathwright generates marketing copy with the OATH formula
(Oblivious-Apathetic-Thinking-Hurting): one message per audience-awareness
stage, woven into a single campaign by a hosted LLM backend.

Any brief field not passed as a flag is collected interactively.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./oathwright.toml     Project-level config
3. ~/.config/oathwright/config.toml   Global config

The selected backend reads its credential from the environment:
GEMINI_API_KEY or OPENAI_API_KEY.

Example:
  oathwright --brand "Acme" --describe "a software company"
  oathwright --output json --quiet --brand Acme --describe "a bakery" \
      --oblivious "..." --apathetic "..." --thinking "..." --hurting "..."
"#)]
pub struct Cli {
    /// Brand or company name
    #[arg(long, value_name = "NAME")]
    pub brand: Option<String>,

    /// What the company does, in 5-6 words
    #[arg(long, value_name = "TEXT")]
    pub describe: Option<String>,

    /// Message for the oblivious audience
    #[arg(long, value_name = "TEXT")]
    pub oblivious: Option<String>,

    /// Message for the apathetic audience
    #[arg(long, value_name = "TEXT")]
    pub apathetic: Option<String>,

    /// Message for the thinking audience
    #[arg(long, value_name = "TEXT")]
    pub thinking: Option<String>,

    /// Message for the hurting audience
    #[arg(long, value_name = "TEXT")]
    pub hurting: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
