//! CLI parse: clap types for discdump. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Discdump CLI - integrity manifests for optical-disc image trees
#[derive(Parser)]
#[command(name = "discdump")]
#[command(about = "Integrity manifest builder for optical-disc image directory trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a disc tree and build the integrity manifest
    Scan {
        /// Disc root directory (interactive prompt when omitted)
        root: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Report file path (default: timestamped name in the working directory)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Skip writing the report file
        #[arg(long)]
        no_report: bool,

        /// Suppress the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Print the title/id summary from the disc header
    Info {
        /// Disc root directory (interactive prompt when omitted)
        root: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
