//! # Formatting and Masking
//!
//! Turns raw input into the display form of its kind:
//!
//! | Kind | Pattern |
//! |------|---------|
//! | CPF | `DDD.DDD.DDD-DD` |
//! | CNPJ | `DD.DDD.DDD/DDDD-DD` |
//! | masked CPF | `*.DDD.*-DD` |
//!
//! Every operation runs the same pipeline: extract digits, reject empty
//! input, reject more than 14 digits, optionally verify the checksum,
//! classify, left-pad to the canonical width, then punctuate. Formatting
//! never changes the numeric value of the identifier.

use crate::digits::{extract_digits, DigitString};
use crate::error::DocumentError;
use crate::kind::{classify, Kind, CNPJ_LEN};
use crate::validate::is_valid_digits;

/// Character that replaces hidden digit groups in [`mask_cpf`].
pub const MASK_CHAR: char = '*';

/// Format a CPF or CNPJ given as text.
///
/// With `check` set, the value must carry matching verification digits.
///
/// # Errors
///
/// - [`DocumentError::NullOrEmptyInput`] for empty input or input without digits.
/// - [`DocumentError::LengthExceeded`] for more than 14 digits.
/// - [`DocumentError::ChecksumMismatch`] when `check` is set and the value is invalid.
pub fn format(raw: &str, check: bool) -> Result<String, DocumentError> {
    let (kind, digits) = canonicalize(raw, check)?;
    Ok(punctuate(kind, &digits))
}

/// Format with validation on.
///
/// # Errors
///
/// Same as [`format`] with `check = true`.
pub fn format_default(raw: &str) -> Result<String, DocumentError> {
    format(raw, true)
}

/// Format a CPF or CNPJ given as an integer, classified by magnitude.
///
/// # Errors
///
/// Same as [`format`], except that an integer is never empty.
pub fn format_number(value: u64, check: bool) -> Result<String, DocumentError> {
    let (kind, digits) = canonicalize_digits(DigitString::from_number(value), check)?;
    Ok(punctuate(kind, &digits))
}

/// Format an integer as an explicit kind.
///
/// This is the length hint for integers whose leading zeros would
/// otherwise change their classification, e.g. a CNPJ starting with `000`.
///
/// # Errors
///
/// - [`DocumentError::LengthExceeded`] for more than 14 digits.
/// - [`DocumentError::UnexpectedKind`] when `kind` is [`Kind::Invalid`] or
///   `value` has more digits than `kind` allows.
/// - [`DocumentError::ChecksumMismatch`] when `check` is set and the value is invalid.
pub fn format_number_as(value: u64, kind: Kind, check: bool) -> Result<String, DocumentError> {
    let padded = pad_as(DigitString::from_number(value), kind, check)?;
    Ok(punctuate(kind, &padded))
}

/// Format text as an explicit kind instead of inferring it from the digit count.
///
/// # Errors
///
/// - [`DocumentError::NullOrEmptyInput`] for empty input or input without digits.
/// - Otherwise the same as [`format_number_as`].
pub fn format_as(raw: &str, kind: Kind, check: bool) -> Result<String, DocumentError> {
    let digits = extract_digits(raw);
    if digits.is_empty() {
        return Err(DocumentError::NullOrEmptyInput);
    }
    let padded = pad_as(digits, kind, check)?;
    Ok(punctuate(kind, &padded))
}

/// Canonical, zero-padded digit string of a CPF or CNPJ.
///
/// Accepts punctuated, partially punctuated, or bare input.
///
/// # Errors
///
/// Same as [`format`].
pub fn to_only_digits(raw: &str, check: bool) -> Result<String, DocumentError> {
    let (_, digits) = canonicalize(raw, check)?;
    Ok(digits.into_string())
}

/// Canonical digits with validation off.
///
/// # Errors
///
/// Same as [`format`] with `check = false`.
pub fn to_only_digits_default(raw: &str) -> Result<String, DocumentError> {
    to_only_digits(raw, false)
}

/// Format a CPF for display with the first and third groups hidden.
///
/// `"11144477735"` becomes `"*.444.*-35"`. The value is not validated.
/// Empty input yields a lone mask character instead of an error.
///
/// A 12 to 14 digit value is refused rather than masked. The CPF pattern
/// only fits 11 digits, and applying it to a CNPJ would hide the wrong
/// groups and drop the verification digits from view.
///
/// # Errors
///
/// - [`DocumentError::NullOrEmptyInput`] for non-empty input without digits.
/// - [`DocumentError::LengthExceeded`] for more than 14 digits.
/// - [`DocumentError::UnexpectedKind`] when the value classifies as a CNPJ.
pub fn mask_cpf(raw: &str) -> Result<String, DocumentError> {
    if raw.is_empty() {
        return Ok(MASK_CHAR.to_string());
    }
    let (kind, digits) = canonicalize(raw, false)?;
    if kind != Kind::Cpf {
        return Err(DocumentError::UnexpectedKind {
            expected: Kind::Cpf,
            found: kind,
        });
    }
    let s = digits.as_str();
    Ok(format!("{MASK_CHAR}.{}.{MASK_CHAR}-{}", &s[3..6], &s[9..11]))
}

fn canonicalize(raw: &str, check: bool) -> Result<(Kind, DigitString), DocumentError> {
    if raw.is_empty() {
        return Err(DocumentError::NullOrEmptyInput);
    }
    let digits = extract_digits(raw);
    if digits.is_empty() {
        return Err(DocumentError::NullOrEmptyInput);
    }
    canonicalize_digits(digits, check)
}

/// Pad `digits` to the canonical width of `kind`, which must be able to hold them.
fn pad_as(digits: DigitString, kind: Kind, check: bool) -> Result<DigitString, DocumentError> {
    if digits.len() > CNPJ_LEN {
        tracing::debug!(len = digits.len(), "rejecting over-long value");
        return Err(DocumentError::LengthExceeded { len: digits.len() });
    }
    let len = match kind.canonical_len() {
        Some(len) if digits.len() <= len => len,
        _ => {
            return Err(DocumentError::UnexpectedKind {
                expected: kind,
                found: classify(&digits),
            })
        }
    };
    let padded = digits.left_pad(len);
    if check && !is_valid_digits(&padded) {
        tracing::debug!(%kind, "rejecting value with mismatched verification digits");
        return Err(DocumentError::ChecksumMismatch {
            kind,
            digits: padded.into_string(),
        });
    }
    Ok(padded)
}

fn canonicalize_digits(
    digits: DigitString,
    check: bool,
) -> Result<(Kind, DigitString), DocumentError> {
    if digits.len() > CNPJ_LEN {
        tracing::debug!(len = digits.len(), "rejecting over-long value");
        return Err(DocumentError::LengthExceeded { len: digits.len() });
    }
    let kind = classify(&digits);
    let padded = match kind.canonical_len() {
        Some(len) => digits.left_pad(len),
        None => return Err(DocumentError::LengthExceeded { len: digits.len() }),
    };
    if check && !is_valid_digits(&padded) {
        tracing::debug!(%kind, "rejecting value with mismatched verification digits");
        return Err(DocumentError::ChecksumMismatch {
            kind,
            digits: padded.into_string(),
        });
    }
    Ok((kind, padded))
}

/// Insert the punctuation of `kind` into a canonical-width digit string.
fn punctuate(kind: Kind, digits: &DigitString) -> String {
    let s = digits.as_str();
    match kind {
        Kind::Cpf => format!("{}.{}.{}-{}", &s[..3], &s[3..6], &s[6..9], &s[9..11]),
        Kind::Cnpj => format!(
            "{}.{}.{}/{}-{}",
            &s[..2],
            &s[2..5],
            &s[5..8],
            &s[8..12],
            &s[12..14]
        ),
        Kind::Invalid => s.to_string(),
    }
}
