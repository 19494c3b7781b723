//! # docbr CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docbr_cli::complete::{run_complete, CompleteArgs};
use docbr_cli::config::{CliConfig, OutputFormat};
use docbr_cli::digits::{run_digits, DigitsArgs};
use docbr_cli::format::{run_format, FormatArgs};
use docbr_cli::mask::{run_mask, MaskArgs};
use docbr_cli::validate::{run_validate, ValidateArgs};
use docbr_cli::Settings;

/// docbr — CPF/CNPJ toolkit
///
/// Validates, formats, normalizes, and masks Brazilian taxpayer
/// identifiers, and computes their verification digits.
#[derive(Parser, Debug)]
#[command(name = "docbr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides the configuration file.
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the verification digits of one or more values.
    Validate(ValidateArgs),

    /// Punctuate a CPF or CNPJ.
    Format(FormatArgs),

    /// Normalize a value to its canonical digits.
    Digits(DigitsArgs),

    /// Display a CPF with some digit groups hidden.
    Mask(MaskArgs),

    /// Append verification digits to a CPF or CNPJ base.
    Complete(CompleteArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };
    let settings = Settings::resolve(config, cli.output);
    tracing::debug!(?settings, "resolved settings");

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &settings),
        Commands::Format(args) => run_format(args, &settings),
        Commands::Digits(args) => run_digits(args, &settings),
        Commands::Mask(args) => run_mask(args, &settings),
        Commands::Complete(args) => run_complete(args, &settings),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
