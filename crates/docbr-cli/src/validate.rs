//! # Validate Subcommand
//!
//! Checks the verification digits of one or more values. Exits `0` when
//! every value is valid and `1` otherwise. A value that cannot be checked at
//! all (empty in strict mode, no digits) counts as invalid and its error is
//! reported alongside.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use docbr_core::{classify, extract_digits, is_valid_with, Kind};

use crate::config::OutputFormat;
use crate::output::Outcome;
use crate::Settings;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// CPF or CNPJ values, punctuated or not.
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,

    /// Treat empty values as valid.
    #[arg(long)]
    pub allow_empty: bool,
}

/// Result for a single value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Value as given on the command line.
    pub input: String,
    /// Kind inferred from the digit count; absent when there are no digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Whether the value passed.
    pub valid: bool,
    /// Why the value could not be checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    fn check(input: &str, allow_empty: bool) -> Self {
        let digits = extract_digits(input);
        let kind = (!digits.is_empty()).then(|| classify(&digits));
        match is_valid_with(Some(input), allow_empty) {
            Ok(valid) => Self {
                input: input.to_string(),
                kind,
                valid,
                error: None,
            },
            Err(e) => {
                tracing::debug!(input, error = %e, "value could not be checked");
                Self {
                    input: input.to_string(),
                    kind,
                    valid: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn text_line(&self) -> String {
        let status = match (&self.error, self.valid, self.kind) {
            (Some(err), _, _) => format!("error: {err}"),
            (None, true, Some(kind)) => format!("valid {kind}"),
            (None, true, None) => "valid (empty)".to_string(),
            (None, false, Some(Kind::Invalid)) => "invalid (too many digits)".to_string(),
            (None, false, Some(kind)) => format!("invalid {kind}"),
            (None, false, None) => "invalid".to_string(),
        };
        format!("{}\t{status}", self.input)
    }
}

/// Check every value and render the reports.
pub fn execute(args: &ValidateArgs, settings: &Settings) -> Result<Outcome> {
    let allow_empty = args.allow_empty || settings.allow_empty;
    let reports: Vec<ValidationReport> = args
        .values
        .iter()
        .map(|v| ValidationReport::check(v, allow_empty))
        .collect();

    let failed = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(checked = reports.len(), failed, "validation finished");

    let rendered = match settings.output {
        OutputFormat::Text => reports
            .iter()
            .map(ValidationReport::text_line)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&reports)?,
    };
    Ok(Outcome {
        rendered,
        code: u8::from(failed > 0),
    })
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> Result<u8> {
    Ok(execute(args, settings)?.emit())
}
