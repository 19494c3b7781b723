//! # Digits Subcommand
//!
//! Normalizes a punctuated or partially punctuated value to its canonical,
//! zero-padded digit string. Validation is off unless `--check` is given.

use anyhow::{Context, Result};
use clap::Args;

use docbr_core::{classify, extract_digits, to_only_digits};

use crate::output::{Conversion, Outcome};
use crate::Settings;

/// Arguments for the digits subcommand.
#[derive(Args, Debug)]
pub struct DigitsArgs {
    /// CPF or CNPJ value, punctuated or not.
    pub value: String,

    /// Fail when the verification digits do not match.
    #[arg(long)]
    pub check: bool,
}

/// Normalize the value and render the result.
pub fn execute(args: &DigitsArgs, settings: &Settings) -> Result<Outcome> {
    let output = to_only_digits(&args.value, args.check)
        .with_context(|| format!("cannot normalize '{}'", args.value))?;
    let kind = classify(&extract_digits(&output));
    Conversion {
        input: &args.value,
        kind: Some(kind),
        output,
    }
    .into_outcome(settings.output)
}

/// Execute the digits subcommand.
pub fn run_digits(args: &DigitsArgs, settings: &Settings) -> Result<u8> {
    Ok(execute(args, settings)?.emit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: &str, check: bool) -> DigitsArgs {
        DigitsArgs {
            value: value.to_string(),
            check,
        }
    }

    #[test]
    fn strips_punctuation() {
        let out = execute(&args("11.222.333/0001-81", false), &Settings::default()).unwrap();
        assert_eq!(out.rendered, "11222333000181");
    }

    #[test]
    fn pads_short_values() {
        let out = execute(&args("1.234.567-890", false), &Settings::default()).unwrap();
        assert_eq!(out.rendered, "01234567890");
    }

    #[test]
    fn check_is_opt_in() {
        let s = Settings::default();
        assert!(execute(&args("111.444.777-36", false), &s).is_ok());
        assert!(execute(&args("111.444.777-36", true), &s).is_err());
    }

    #[test]
    fn over_long_value_is_an_error() {
        let err = execute(&args("1234567890123456", false), &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("bigger than 14"));
    }
}
