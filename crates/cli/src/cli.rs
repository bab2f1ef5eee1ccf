//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::defaults;

/// Strip header, footer, and metadata groups from RTF documents
#[derive(Parser)]
#[command(name = "rtfstrip")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RTFSTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Strip configured groups from RTF files in place
    Strip(StripArgs),
    /// Convert documents to RTF with LibreOffice
    Convert(ConvertArgs),
    /// Convert documents, then strip the resulting RTF files
    Run(RunArgs),
    /// Write a default rtfstrip.toml
    Init(InitArgs),
}

/// Output options shared by every processing command.
#[derive(clap::Args, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = defaults::walk::MAX_DEPTH)]
    pub max_depth: usize,
}

#[derive(clap::Args)]
pub struct StripArgs {
    /// RTF files or directories to strip
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Report what would be stripped without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Documents or directories to convert
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Converter executable (overrides [libreoffice] path)
    #[arg(long, value_name = "FILE")]
    pub tool: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Files or directories to convert and strip
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Converter executable (overrides [libreoffice] path)
    #[arg(long, value_name = "FILE")]
    pub tool: Option<PathBuf>,

    /// Report what would be stripped without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
