//! Capital CLI - Command Line Operations for Risk-Weight Calculation
//!
//! This is the operational entry point for the capital_engine library.
//!
//! # Commands
//!
//! - `capital evaluate --exposure <file>` - Classify and weight one exposure
//! - `capital check --exposure <file>` - Validate an exposure record only
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only reads input, calls the
//! engine and prints. Every weighting decision lives in capital_engine.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel};

/// Standardised credit-risk weight calculator
#[derive(Parser)]
#[command(name = "capital")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, classify and weight one exposure
    Evaluate {
        /// Path to the exposure record (JSON)
        #[arg(short, long)]
        exposure: PathBuf,

        /// Output format (json, table)
        #[arg(short, long)]
        format: Option<String>,

        /// Omit the audit trail from the output
        #[arg(long)]
        no_trail: bool,
    },

    /// Validate an exposure record without evaluating it
    Check {
        /// Path to the exposure record (JSON)
        #[arg(short, long)]
        exposure: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (format, no_trail) = match &cli.command {
        Commands::Evaluate {
            format, no_trail, ..
        } => (format.clone(), *no_trail),
        Commands::Check { .. } => (None, false),
    };
    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        output_format: format,
        no_trail,
    };
    let mut config = build_config(&args)?;
    if cli.verbose && cli.log_level.is_none() {
        config.log_level = LogLevel::Debug;
    }

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Evaluate { exposure, .. } => {
            commands::evaluate::run(&exposure, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { exposure } => {
            // Defects are already printed; only the exit status remains
            if commands::check::run(&exposure)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
