//! # docbr-core — CPF/CNPJ Identifier Engine
//!
//! Validation, normalization, formatting, and masking of the Brazilian
//! taxpayer identifiers: CPF (11 digits, individuals) and CNPJ (14 digits,
//! organizations). Both end in two verification digits computed with a
//! positional weighted modulo-11 checksum.
//!
//! ## Pipeline
//!
//! ```text
//! extract_digits ─► classify ─► (is_valid | compute_both_digits) ─► format
//! ```
//!
//! ```
//! use docbr_core::{format, is_valid, mask_cpf};
//!
//! assert!(is_valid("111.444.777-35").unwrap());
//! assert_eq!(format("11222333000181", true).unwrap(), "11.222.333/0001-81");
//! assert_eq!(mask_cpf("11144477735").unwrap(), "*.444.*-35");
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Pure functions.** No I/O, no shared mutable state. Weight tables,
//!    patterns, and the mask character are `const`, so every operation is
//!    safe to call from any thread.
//!
//! 2. **Textual input keeps leading zeros.** Kind is decided on the digit
//!    count of the extracted string. Integer input cannot carry leading
//!    zeros and is classified by magnitude; [`format_number_as`] takes an
//!    explicit [`Kind`] when that is not good enough.
//!
//! 3. **One path to verification digits.** The second digit depends on the
//!    first; [`checksum::verification_digits`] is the only code that
//!    performs both passes.
//!
//! 4. **Typed identifiers.** [`Cpf`], [`Cnpj`], and [`TaxId`] can only be
//!    constructed with valid verification digits.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod digits;
pub mod error;
pub mod format;
pub mod identity;
pub mod kind;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use checksum::{compute_both_digits, VerificationDigits, CNPJ_WEIGHTS, CPF_WEIGHTS};
pub use digits::{extract_digits, DigitString};
pub use error::{DocumentError, ValidationError};
pub use format::{
    format, format_as, format_default, format_number, format_number_as, mask_cpf,
    to_only_digits, to_only_digits_default, MASK_CHAR,
};
pub use identity::{Cnpj, Cpf, TaxId};
pub use kind::{classify, Kind, CNPJ_LEN, CPF_LEN};
pub use validate::{is_valid, is_valid_digits, is_valid_number, is_valid_with};
