//! CLI argument parsing for review-gate

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "review-gate")]
#[command(
    author,
    version,
    about = "Interactive review gate: forwards sub-prompts until a completion keyword",
    long_about = None,
    after_help = "Protocol lines go to stdout; diagnostics go to stderr."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    pub log_level: Option<String>,
}
