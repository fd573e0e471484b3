//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for consultation results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Analysis, every advisor's response, and the summary
    Full,
    /// Only the cross-advisor summary
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for advisor-panel
#[derive(Parser, Debug)]
#[command(name = "advisor-panel")]
#[command(author, version, about = "Ask a panel of simulated expert advisors")]
#[command(long_about = r#"
advisor-panel dispatches one question to a panel of simulated expert
advisors concurrently, tolerates individual failures, and synthesizes the
answers into a consensus report.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./panel.toml        Project-level config
3. ~/.config/advisor-panel/config.toml   Global config

Example:
  advisor-panel "How should we launch an herbal sleep aid?"
  advisor-panel --advisor adv-clinical --advisor adv-product "Is the dosage claim defensible?"
  advisor-panel --analyze-only "URGENT: need immediate help with product launch strategy!"
"#)]
pub struct Cli {
    /// The question to put to the panel
    pub question: String,

    /// Only run question analysis, skip the consultation
    #[arg(long)]
    pub analyze_only: bool,

    /// Skip the cross-advisor summary
    #[arg(long)]
    pub no_summary: bool,

    /// Restrict the panel to these advisor ids (repeatable)
    #[arg(short, long, value_name = "ID")]
    pub advisor: Vec<String>,

    /// Free-form session context passed to every advisor
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Per-advisor timeout override in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Retry attempts override per advisor
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
