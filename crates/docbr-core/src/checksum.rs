//! # Verification Digits
//!
//! Weighted modulo-11 checksum shared by CPF and CNPJ. Each digit of the
//! base is multiplied by a positional weight, the products are summed, and
//! the remainder modulo 11 is turned into a single digit:
//!
//! ```text
//! digit = 11 - (sum % 11)   if that is <= 9
//!         0                 otherwise
//! ```
//!
//! Weights are aligned from the **right**: the last base digit pairs with
//! the table's last entry when the base is as long as the table, and with
//! the second-to-last entry when it is one digit shorter. This lets one
//! table serve both passes.
//!
//! The second verification digit is computed over the base *extended with
//! the first verification digit*. [`verification_digits`] is the only code
//! path that performs both passes, so the second digit can never be derived
//! from the wrong base.

use serde::Serialize;

use crate::digits::DigitString;
use crate::error::DocumentError;
use crate::kind::Kind;

/// CPF weights: 10 entries over a 9-digit base (first pass uses the last 9).
pub const CPF_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights: 13 entries over a 12-digit base (first pass uses the last 12).
pub const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// The two trailing digits of a CPF or CNPJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerificationDigits {
    /// Computed over the base digits.
    pub first: u8,
    /// Computed over the base digits followed by `first`.
    pub second: u8,
}

impl VerificationDigits {
    /// Whether `tail` is exactly these two digits, in order.
    pub fn matches(&self, tail: &[u8]) -> bool {
        tail == [self.first, self.second].as_slice()
    }
}

impl std::fmt::Display for VerificationDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Compute one verification digit.
///
/// Digit `i` of an `N`-digit base is multiplied by `weights[W - N + i]`
/// where `W` is the table length. Returns `None` when the base is longer
/// than the table.
pub fn calc_digit(base: &[u8], weights: &[u32]) -> Option<u8> {
    let offset = weights.len().checked_sub(base.len())?;
    let sum: u32 = base
        .iter()
        .zip(&weights[offset..])
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();
    let digit = 11 - sum % 11;
    Some(if digit > 9 { 0 } else { digit as u8 })
}

/// Compute both verification digits for `base` using `weights`.
///
/// `base` must be exactly one digit shorter than `weights`.
pub fn verification_digits(base: &[u8], weights: &[u32]) -> Option<VerificationDigits> {
    if base.len() + 1 != weights.len() {
        return None;
    }
    let first = calc_digit(base, weights)?;
    let mut extended = Vec::with_capacity(weights.len());
    extended.extend_from_slice(base);
    extended.push(first);
    let second = calc_digit(&extended, weights)?;
    Some(VerificationDigits { first, second })
}

/// Compute both verification digits for a 9-digit (CPF) or 12-digit (CNPJ) base.
///
/// The kind is inferred from the base length.
///
/// # Errors
///
/// Returns [`DocumentError::InvalidBase`] for any other length.
pub fn compute_both_digits(base: &DigitString) -> Result<(Kind, VerificationDigits), DocumentError> {
    let invalid = || DocumentError::InvalidBase { len: base.len() };
    let kind = Kind::for_base_len(base.len()).ok_or_else(invalid)?;
    let weights = kind.weights().ok_or_else(invalid)?;
    let digits = verification_digits(&base.values(), weights).ok_or_else(invalid)?;
    Ok((kind, digits))
}

/// Append both verification digits to a 9- or 12-digit base.
///
/// # Errors
///
/// Returns [`DocumentError::InvalidBase`] when the base length matches no kind.
pub fn complete(base: &DigitString) -> Result<DigitString, DocumentError> {
    let (_, digits) = compute_both_digits(base)?;
    let mut full = base.clone();
    full.push_digit(digits.first);
    full.push_digit(digits.second);
    Ok(full)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Verification digits are always single decimal digits.
        #[test]
        fn digits_in_range(base in prop::collection::vec(0u8..10, 12)) {
            let vd = verification_digits(&base, &CNPJ_WEIGHTS).unwrap();
            prop_assert!(vd.first <= 9);
            prop_assert!(vd.second <= 9);
        }

        /// The second digit is the first pass applied to the extended base.
        #[test]
        fn second_digit_depends_on_first(base in prop::collection::vec(0u8..10, 9)) {
            let vd = verification_digits(&base, &CPF_WEIGHTS).unwrap();
            let mut extended = base.clone();
            extended.push(vd.first);
            prop_assert_eq!(calc_digit(&extended, &CPF_WEIGHTS), Some(vd.second));
        }
    }
}
