//! # Output Rendering
//!
//! Every handler produces an [`Outcome`]: the rendered text and the exit
//! code. Rendering is kept apart from printing so handlers can be tested
//! without capturing stdout.

use anyhow::Result;
use serde::Serialize;

use docbr_core::Kind;

use crate::config::OutputFormat;

/// Rendered result of a subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to print on stdout, without trailing newline.
    pub rendered: String,
    /// Process exit code.
    pub code: u8,
}

impl Outcome {
    /// Print the rendered text and hand back the exit code.
    pub fn emit(self) -> u8 {
        println!("{}", self.rendered);
        self.code
    }
}

/// A single input transformed into a single output.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion<'a> {
    /// Value as given on the command line.
    pub input: &'a str,
    /// Kind the value was classified as, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Resulting string.
    pub output: String,
}

impl Conversion<'_> {
    /// Render as a successful [`Outcome`].
    pub fn into_outcome(self, format: OutputFormat) -> Result<Outcome> {
        let rendered = match format {
            OutputFormat::Text => self.output.clone(),
            OutputFormat::Json => serde_json::to_string_pretty(&self)?,
        };
        Ok(Outcome { rendered, code: 0 })
    }
}
