//! # Validation
//!
//! Recomputes both verification digits from the leading base digits and
//! compares them against the trailing two digits of the canonical string.
//!
//! ## Strict and lenient modes
//!
//! - [`is_valid`] is strict: an empty input is a caller error
//!   ([`DocumentError::NullOrEmptyInput`]), not a `false`.
//! - [`is_valid_with`] with `allow_null_or_empty = true` treats an absent or
//!   empty value as *valid*. This is the escape hatch for optional form
//!   fields; it does not mean "absent", callers must track that themselves.
//!
//! A value of the right length with wrong verification digits is never an
//! error here. It is simply `Ok(false)`.

use crate::checksum::verification_digits;
use crate::digits::{extract_digits, DigitString};
use crate::error::DocumentError;
use crate::kind::classify;

/// Validate a CPF or CNPJ given as text, rejecting empty input.
///
/// # Errors
///
/// Returns [`DocumentError::NullOrEmptyInput`] when `raw` is empty or has
/// no digits.
pub fn is_valid(raw: &str) -> Result<bool, DocumentError> {
    is_valid_with(Some(raw), false)
}

/// Validate a CPF or CNPJ, optionally accepting an absent or empty value.
///
/// # Errors
///
/// Returns [`DocumentError::NullOrEmptyInput`] when `raw` is `None` or empty
/// and `allow_null_or_empty` is `false`, and whenever a non-empty `raw`
/// contains no digits at all.
pub fn is_valid_with(raw: Option<&str>, allow_null_or_empty: bool) -> Result<bool, DocumentError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ if allow_null_or_empty => return Ok(true),
        _ => return Err(DocumentError::NullOrEmptyInput),
    };
    let digits = extract_digits(raw);
    if digits.is_empty() {
        return Err(DocumentError::NullOrEmptyInput);
    }
    Ok(is_valid_digits(&digits))
}

/// Validate a CPF or CNPJ given as an integer.
///
/// The kind is decided by the magnitude of `value` (see
/// [`DigitString::from_number`]): a CNPJ with three or more leading zeros
/// is indistinguishable from a CPF and is checked as one.
pub fn is_valid_number(value: u64) -> bool {
    is_valid_digits(&DigitString::from_number(value))
}

/// Validate an already-extracted digit string.
///
/// Shorter strings are zero-padded to the canonical width of their kind
/// before the check. Empty and over-long strings are invalid.
pub fn is_valid_digits(digits: &DigitString) -> bool {
    if digits.is_empty() {
        return false;
    }
    let kind = classify(digits);
    let (Some(len), Some(weights)) = (kind.canonical_len(), kind.weights()) else {
        tracing::trace!(len = digits.len(), "digit count exceeds any identifier kind");
        return false;
    };
    let values = digits.left_pad(len).values();
    let (base, tail) = values.split_at(len - 2);
    let valid = verification_digits(base, weights).is_some_and(|vd| vd.matches(tail));
    if !valid {
        tracing::trace!(%kind, "verification digits do not match");
    }
    valid
}
