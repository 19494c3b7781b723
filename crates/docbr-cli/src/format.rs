//! # Format Subcommand
//!
//! Punctuates a CPF (`DDD.DDD.DDD-DD`) or CNPJ (`DD.DDD.DDD/DDDD-DD`).
//! Verification digits are checked unless `--no-check` is given or the
//! configuration sets `check: false`.

use anyhow::{Context, Result};
use clap::Args;

use docbr_core::{classify, extract_digits, format, format_as, Kind};

use crate::output::{Conversion, Outcome};
use crate::Settings;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// CPF or CNPJ value, punctuated or not.
    pub value: String,

    /// Format without validating the verification digits.
    #[arg(long)]
    pub no_check: bool,

    /// Pad to this kind instead of inferring it from the digit count.
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<Kind>,
}

fn parse_kind(s: &str) -> Result<Kind, String> {
    s.parse()
}

/// Format the value and render the result.
pub fn execute(args: &FormatArgs, settings: &Settings) -> Result<Outcome> {
    let check = settings.check && !args.no_check;
    let (kind, output) = match args.kind {
        Some(kind) => {
            let output = format_as(&args.value, kind, check)
                .with_context(|| format!("cannot format '{}' as {kind}", args.value))?;
            (kind, output)
        }
        None => {
            let output = format(&args.value, check)
                .with_context(|| format!("cannot format '{}'", args.value))?;
            (classify(&extract_digits(&args.value)), output)
        }
    };
    Conversion {
        input: &args.value,
        kind: Some(kind),
        output,
    }
    .into_outcome(settings.output)
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, settings: &Settings) -> Result<u8> {
    Ok(execute(args, settings)?.emit())
}
