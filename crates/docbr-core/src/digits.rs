//! # Digit Extraction
//!
//! Every engine operation starts from a [`DigitString`]: the ASCII digits of
//! the input in their original order, with every separator, letter, and
//! whitespace character removed. The only way to build one is through
//! [`extract_digits`], [`DigitString::from_number`], or
//! [`DigitString::left_pad`], so the "digits only" property holds by
//! construction. Inside the crate, `DigitString::push_digit` appends
//! computed verification digits.
//!
//! Extraction is total. It never rejects input; an input with no digits
//! yields an empty string, and deciding whether that is acceptable is left
//! to the validator and formatter.

use serde::Serialize;

/// An ordered sequence of ASCII decimal digits with no separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DigitString(String);

/// Remove every character that is not `0`-`9`, preserving relative order.
///
/// Non-ASCII digits (e.g. Arabic-Indic numerals) are treated as separators.
pub fn extract_digits(text: &str) -> DigitString {
    DigitString(text.chars().filter(char::is_ascii_digit).collect())
}

impl DigitString {
    /// Decimal representation of an integer, without any left padding.
    ///
    /// Integers cannot carry leading zeros, so the length of the result
    /// reflects the magnitude of the value rather than the identifier's
    /// intended width. Callers that need a specific kind must pad
    /// explicitly (see [`crate::format_number_as`]).
    pub fn from_number(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Zero-pad on the left up to `width` digits.
    ///
    /// Strings already at or beyond `width` are returned unchanged.
    pub fn left_pad(&self, width: usize) -> Self {
        if self.0.len() >= width {
            return self.clone();
        }
        let mut padded = "0".repeat(width - self.0.len());
        padded.push_str(&self.0);
        Self(padded)
    }

    /// Append a single digit value (0-9).
    pub(crate) fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "not a decimal digit: {digit}");
        self.0.push(char::from(b'0' + digit));
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no digits were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of every digit, left to right.
    pub fn values(&self) -> Vec<u8> {
        self.0.bytes().map(|b| b - b'0').collect()
    }

    /// Consume the wrapper and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
