//! slngen CLI Binary
//!
//! Generates `<dir>/<dir name>.sln` for the directory given on the command line.

use clap::Parser;
use slngen::cli::{map_error, Cli, RunContext};
use slngen::config::ConfigLoader;
use slngen::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early; a bad logging setup never blocks generation
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Ignoring logging configuration: {}", e);
        if let Err(e) = init_logging(Some(&LoggingConfig::default())) {
            eprintln!("Failed to initialize logging: {}", e);
        }
    }

    let context = match RunContext::new(cli.directory.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!("Invalid invocation: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    println!("Writing {}...", context.output_path().display());

    match context.execute() {
        Ok(summary) => {
            info!(path = %summary.output_path.display(), "Command completed successfully");
        }
        Err(e) => {
            debug!("Generation failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    };
    let mut config = match loaded {
        Ok(c) => c.logging,
        Err(e) => {
            eprintln!("Ignoring configuration: {}", e);
            LoggingConfig::default()
        }
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
