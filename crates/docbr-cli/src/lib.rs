//! # docbr-cli — Command-Line Front End for docbr-core
//!
//! Provides the `docbr` binary. The engine itself has no CLI surface; this
//! crate is one of its callers and carries no identifier logic of its own.
//!
//! ## Subcommands
//!
//! - `docbr validate` — Check one or more CPF/CNPJ values.
//! - `docbr format` — Punctuate a value (`DDD.DDD.DDD-DD` / `DD.DDD.DDD/DDDD-DD`).
//! - `docbr digits` — Normalize a value to its canonical digits.
//! - `docbr mask` — Partially hide a CPF (`*.DDD.*-DD`).
//! - `docbr complete` — Append verification digits to a 9- or 12-digit base.
//!
//! ```bash
//! docbr validate 111.444.777-35 11.222.333/0001-81
//! docbr format 11222333000181
//! docbr --output json mask 11144477735
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers return the process exit code: `0` success, `1` a value
//!   failed validation. Engine errors propagate as `anyhow` errors.

pub mod complete;
pub mod config;
pub mod digits;
pub mod format;
pub mod mask;
pub mod output;
pub mod validate;

use config::{CliConfig, OutputFormat};

/// Settings resolved from the configuration file and global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Validate before formatting unless `--no-check` is given.
    pub check: bool,
    /// Treat empty values as valid in `validate`.
    pub allow_empty: bool,
    /// How results are printed.
    pub output: OutputFormat,
}

impl Settings {
    /// Merge a loaded configuration with command-line overrides.
    pub fn resolve(config: CliConfig, output: Option<OutputFormat>) -> Self {
        Self {
            check: config.check,
            allow_empty: config.allow_empty,
            output: output.unwrap_or(config.output),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(CliConfig::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_matches_config_default() {
        let s = Settings::default();
        assert!(s.check);
        assert!(!s.allow_empty);
        assert_eq!(s.output, OutputFormat::Text);
    }

    #[test]
    fn command_line_output_overrides_config() {
        let config = CliConfig {
            output: OutputFormat::Text,
            ..CliConfig::default()
        };
        let s = Settings::resolve(config, Some(OutputFormat::Json));
        assert_eq!(s.output, OutputFormat::Json);
    }

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<complete::CompleteArgs>();
        let _ = std::any::type_name::<digits::DigitsArgs>();
        let _ = std::any::type_name::<format::FormatArgs>();
        let _ = std::any::type_name::<mask::MaskArgs>();
        let _ = std::any::type_name::<validate::ValidateArgs>();
    }
}
