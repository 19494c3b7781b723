//! # Error Hierarchy
//!
//! Structured error types for the identifier engine, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Errors are raised at the point of detection and propagate to the caller.
//! The computation is deterministic, so nothing here is retryable. A
//! structurally valid value with wrong verification digits is *not* an error
//! for [`crate::is_valid`]; it is only raised by formatting with `check` on.

use thiserror::Error;

use crate::kind::Kind;

/// Top-level error type for the engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A required value was absent, empty, or carried no digits at all.
    #[error("value cannot be null or empty")]
    NullOrEmptyInput,

    /// The canonical digit string is longer than a CNPJ.
    #[error("value has {len} digits; size cannot be bigger than 14")]
    LengthExceeded {
        /// Number of digits found after extraction.
        len: usize,
    },

    /// Verification digits do not match the base digits.
    #[error("{digits} is not a valid {kind}")]
    ChecksumMismatch {
        /// The kind the value was classified as.
        kind: Kind,
        /// Canonical (zero-padded) digits that failed the check.
        digits: String,
    },

    /// The value classified as a different kind than the operation accepts.
    #[error("expected a {expected} value, found {found}")]
    UnexpectedKind {
        /// Kind the operation requires.
        expected: Kind,
        /// Kind the value classified as.
        found: Kind,
    },

    /// A base for verification-digit completion has the wrong length.
    #[error("a base of {len} digits matches no identifier kind (expected 9 for CPF or 12 for CNPJ)")]
    InvalidBase {
        /// Number of digits supplied.
        len: usize,
    },
}

/// Validation errors for the typed identifier newtypes.
///
/// These carry the rejected input so that callers can report it back to
/// the user without keeping the original value around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is not an 11-digit CPF with matching verification digits.
    #[error("invalid CPF: \"{0}\" (expected 11 digits, optionally as DDD.DDD.DDD-DD)")]
    InvalidCpf(String),

    /// Value is not a 14-digit CNPJ with matching verification digits.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits, optionally as DD.DDD.DDD/DDDD-DD)")]
    InvalidCnpj(String),

    /// Value is neither a CPF nor a CNPJ.
    #[error("invalid taxpayer identifier: \"{0}\"")]
    InvalidTaxId(String),
}
