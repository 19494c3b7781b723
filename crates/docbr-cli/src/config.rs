//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key is optional and
//! falls back to its default; unknown keys are rejected so that typos do
//! not silently change behaviour.
//!
//! ```yaml
//! check: false        # format without validating
//! allow_empty: true   # empty values pass `validate`
//! output: json        # text | json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output rendering for every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

/// Contents of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Validate verification digits before formatting.
    pub check: bool,
    /// Treat an empty value as valid in `validate`.
    pub allow_empty: bool,
    /// Default output format.
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            check: true,
            allow_empty: false,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load the configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse the configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config");
                Self::load(p)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = CliConfig::default();
        assert!(c.check);
        assert!(!c.allow_empty);
        assert_eq!(c.output, OutputFormat::Text);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::from_yaml("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let c = CliConfig::from_yaml("output: json\n").unwrap();
        assert_eq!(c.output, OutputFormat::Json);
        assert!(c.check);
    }

    #[test]
    fn full_document() {
        let c = CliConfig::from_yaml("check: false\nallow_empty: true\noutput: text\n").unwrap();
        assert!(!c.check);
        assert!(c.allow_empty);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(CliConfig::from_yaml("chek: false\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docbr.yaml");
        std::fs::write(&path, "allow_empty: true\n").unwrap();
        let c = CliConfig::load(&path).unwrap();
        assert!(c.allow_empty);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
