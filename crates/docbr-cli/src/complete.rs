//! # Complete Subcommand
//!
//! Appends both verification digits to a 9-digit CPF base or a 12-digit
//! CNPJ base and prints the punctuated result.

use anyhow::{Context, Result};
use clap::Args;

use docbr_core::{compute_both_digits, extract_digits, format};

use crate::output::{Conversion, Outcome};
use crate::Settings;

/// Arguments for the complete subcommand.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Base digits: 9 for a CPF, 12 for a CNPJ. Punctuation is ignored.
    pub base: String,
}

/// Complete the base and render the result.
pub fn execute(args: &CompleteArgs, settings: &Settings) -> Result<Outcome> {
    let base = extract_digits(&args.base);
    let (kind, digits) = compute_both_digits(&base)
        .with_context(|| format!("cannot complete '{}'", args.base))?;
    tracing::debug!(%kind, verification = %digits, "computed verification digits");
    let output = format(&format!("{base}{digits}"), true)?;
    Conversion {
        input: &args.base,
        kind: Some(kind),
        output,
    }
    .into_outcome(settings.output)
}

/// Execute the complete subcommand.
pub fn run_complete(args: &CompleteArgs, settings: &Settings) -> Result<u8> {
    Ok(execute(args, settings)?.emit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(base: &str) -> CompleteArgs {
        CompleteArgs {
            base: base.to_string(),
        }
    }

    #[test]
    fn completes_cpf() {
        let out = execute(&args("111.444.777"), &Settings::default()).unwrap();
        assert_eq!(out.rendered, "111.444.777-35");
    }

    #[test]
    fn completes_cnpj() {
        let out = execute(&args("11.222.333/0001"), &Settings::default()).unwrap();
        assert_eq!(out.rendered, "11.222.333/0001-81");
    }

    #[test]
    fn rejects_other_lengths() {
        let err = execute(&args("1234567890"), &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("10 digits"));
    }
}
