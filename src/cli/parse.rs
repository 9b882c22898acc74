//! CLI parse: clap types for slngen. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// slngen - Generate a Visual Studio solution file mirroring a directory tree
#[derive(Debug, Parser)]
#[command(name = "slngen")]
#[command(version)]
#[command(about = "Generate a deterministic solution file that mirrors a directory tree")]
pub struct Cli {
    /// Directory to generate the solution file for
    pub directory: Option<PathBuf>,

    /// Configuration file path (overrides the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging, including the collected tree
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
