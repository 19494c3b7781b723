//! # Mask Subcommand
//!
//! Displays a CPF with its first and third groups hidden (`*.DDD.*-DD`).
//! The value is not validated, and an empty value prints a lone `*`.

use anyhow::{Context, Result};
use clap::Args;

use docbr_core::{mask_cpf, Kind};

use crate::output::{Conversion, Outcome};
use crate::Settings;

/// Arguments for the mask subcommand.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// CPF value, punctuated or not. May be empty.
    pub value: String,
}

/// Mask the value and render the result.
pub fn execute(args: &MaskArgs, settings: &Settings) -> Result<Outcome> {
    let output =
        mask_cpf(&args.value).with_context(|| format!("cannot mask '{}'", args.value))?;
    let kind = (!args.value.is_empty()).then_some(Kind::Cpf);
    Conversion {
        input: &args.value,
        kind,
        output,
    }
    .into_outcome(settings.output)
}

/// Execute the mask subcommand.
pub fn run_mask(args: &MaskArgs, settings: &Settings) -> Result<u8> {
    Ok(execute(args, settings)?.emit())
}
