//! Discdump CLI Binary
//!
//! Command-line interface for building disc tree integrity manifests.

use clap::Parser;
use discdump::cli::{Cli, Commands, RunContext};
use discdump::config::{ConfigLoader, DumpConfig};
use discdump::logging::init_logging;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let mut config = load_config(&cli);
    apply_logging_flags(&cli, &mut config);

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("discdump starting");

    let context = RunContext::new(config);
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("command completed");
            println!("{}", output);
        }
        Err(e) => {
            error!("command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Load configuration from `--config` or from a `discdump.toml` next to the
/// scanned root. Config load failures fall back to defaults so a broken
/// config file never blocks a scan.
fn load_config(cli: &Cli) -> DumpConfig {
    let loaded = if let Some(ref path) = cli.config {
        ConfigLoader::load_from_file(path)
    } else {
        ConfigLoader::load(config_root(&cli.command))
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            DumpConfig::default()
        }
    }
}

/// Directory whose `discdump.toml` applies to this command.
fn config_root(command: &Commands) -> &Path {
    let root = match command {
        Commands::Scan { root, .. } => root,
        Commands::Info { root, .. } => root,
    };
    root.as_deref().unwrap_or_else(|| Path::new("."))
}

/// Apply CLI logging flags over the loaded configuration.
/// Precedence: explicit flags over `--verbose` over config file.
fn apply_logging_flags(cli: &Cli, config: &mut DumpConfig) {
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = Some(PathBuf::from(file));
        config.logging.output = "file".to_string();
    }
}
