//! # Kind Classification
//!
//! Decides from digit count alone whether a value is an individual (CPF) or
//! organizational (CNPJ) identifier. Digit values are never inspected.
//!
//! | Digits | Kind |
//! |--------|------|
//! | 0..=11 | [`Kind::Cpf`] |
//! | 12..=14 | [`Kind::Cnpj`] |
//! | 15.. | [`Kind::Invalid`] |
//!
//! Only 11 and 14 are canonical widths. Shorter values are the result of
//! lost leading zeros and are left-padded to the canonical width after
//! classification.

use serde::{Deserialize, Serialize};

use crate::checksum::{CNPJ_WEIGHTS, CPF_WEIGHTS};
use crate::digits::DigitString;

/// Canonical digit count of a CPF.
pub const CPF_LEN: usize = 11;

/// Canonical digit count of a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Identifier kind, derived from digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Cadastro de Pessoas Físicas: 9 base digits + 2 verification digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: 12 base digits + 2 verification digits.
    Cnpj,
    /// More digits than any supported identifier.
    #[serde(skip_deserializing)]
    Invalid,
}

/// Classify a digit string by its length.
pub fn classify(digits: &DigitString) -> Kind {
    Kind::for_len(digits.len())
}

impl Kind {
    /// Classify a raw digit count.
    pub fn for_len(len: usize) -> Self {
        match len {
            0..=11 => Kind::Cpf,
            12..=CNPJ_LEN => Kind::Cnpj,
            _ => Kind::Invalid,
        }
    }

    /// Width of the canonical, zero-padded digit string.
    pub fn canonical_len(self) -> Option<usize> {
        match self {
            Kind::Cpf => Some(CPF_LEN),
            Kind::Cnpj => Some(CNPJ_LEN),
            Kind::Invalid => None,
        }
    }

    /// Number of leading digits the verification digits are computed from.
    pub fn base_len(self) -> Option<usize> {
        self.canonical_len().map(|len| len - 2)
    }

    /// Kind whose base has exactly `len` digits.
    pub fn for_base_len(len: usize) -> Option<Self> {
        match len {
            9 => Some(Kind::Cpf),
            12 => Some(Kind::Cnpj),
            _ => None,
        }
    }

    /// Weight table used for the verification digits.
    pub fn weights(self) -> Option<&'static [u32]> {
        match self {
            Kind::Cpf => Some(&CPF_WEIGHTS as &[u32]),
            Kind::Cnpj => Some(&CNPJ_WEIGHTS as &[u32]),
            Kind::Invalid => None,
        }
    }

    /// Upper-case display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Cpf => "CPF",
            Kind::Cnpj => "CNPJ",
            Kind::Invalid => "INVALID",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Kind::Cpf),
            "cnpj" => Ok(Kind::Cnpj),
            other => Err(format!("unknown identifier kind: {other:?} (expected cpf or cnpj)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::extract_digits;

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(&extract_digits("")), Kind::Cpf);
        assert_eq!(classify(&extract_digits("12345678901")), Kind::Cpf);
        assert_eq!(classify(&extract_digits("123456789012")), Kind::Cnpj);
        assert_eq!(classify(&extract_digits("12345678901234")), Kind::Cnpj);
        assert_eq!(classify(&extract_digits("123456789012345")), Kind::Invalid);
    }

    #[test]
    fn classify_ignores_digit_values() {
        assert_eq!(classify(&extract_digits("00000000000000")), Kind::Cnpj);
        assert_eq!(classify(&extract_digits("99999999999")), Kind::Cpf);
    }

    #[test]
    fn canonical_and_base_lengths() {
        assert_eq!(Kind::Cpf.canonical_len(), Some(11));
        assert_eq!(Kind::Cnpj.canonical_len(), Some(14));
        assert_eq!(Kind::Cpf.base_len(), Some(9));
        assert_eq!(Kind::Cnpj.base_len(), Some(12));
        assert_eq!(Kind::Invalid.canonical_len(), None);
        assert_eq!(Kind::Invalid.base_len(), None);
        assert!(Kind::Invalid.weights().is_none());
    }

    #[test]
    fn for_base_len_only_accepts_exact_bases() {
        assert_eq!(Kind::for_base_len(9), Some(Kind::Cpf));
        assert_eq!(Kind::for_base_len(12), Some(Kind::Cnpj));
        assert_eq!(Kind::for_base_len(10), None);
        assert_eq!(Kind::for_base_len(11), None);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("CPF".parse::<Kind>().unwrap(), Kind::Cpf);
        assert_eq!("cnpj".parse::<Kind>().unwrap(), Kind::Cnpj);
        assert!("rg".parse::<Kind>().is_err());
        assert_eq!(Kind::Cnpj.to_string(), "CNPJ");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Cpf).unwrap(), "\"cpf\"");
        let k: Kind = serde_json::from_str("\"cnpj\"").unwrap();
        assert_eq!(k, Kind::Cnpj);
    }

    #[test]
    fn invalid_serializes_but_never_parses() {
        assert_eq!(serde_json::to_string(&Kind::Invalid).unwrap(), "\"invalid\"");
        assert!(serde_json::from_str::<Kind>("\"invalid\"").is_err());
        assert!("invalid".parse::<Kind>().is_err());
    }
}
