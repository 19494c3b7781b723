//! # Identity Newtypes
//!
//! Validated taxpayer identifiers. Each kind is a distinct type: you cannot
//! pass a [`Cnpj`] where a [`Cpf`] is expected, and neither can exist with
//! wrong verification digits.
//!
//! ## Validation
//!
//! Constructors accept bare digits or the punctuated display form. Only
//! ASCII digits and the separators `.`, `-`, `/`, and spaces are allowed,
//! and the digit count must be exactly the canonical width of the kind.
//! Unlike the lenient engine functions, there is no zero-padding here: a
//! typed identifier is always built from all of its digits.
//!
//! Values are stored and serialized as canonical digit strings, and
//! deserialization routes through the same validating constructor.

use serde::{Deserialize, Serialize};

use crate::checksum::VerificationDigits;
use crate::digits::{extract_digits, DigitString};
use crate::error::ValidationError;
use crate::format::{format, mask_cpf};
use crate::kind::{Kind, CNPJ_LEN, CPF_LEN};
use crate::validate::is_valid_digits;

/// Implement `Deserialize` for string newtypes by routing through `new()`,
/// so that invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Extract the canonical digits of `raw` if it is a valid identifier of
/// exactly `len` digits.
fn checked_digits(raw: &str, len: usize) -> Option<DigitString> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '/' | ' ');
    if !raw.chars().all(allowed) {
        return None;
    }
    let digits = extract_digits(raw);
    (digits.len() == len && is_valid_digits(&digits)).then_some(digits)
}

/// The last two digits of a canonical digit string.
fn trailing_digits(digits: &str) -> VerificationDigits {
    let bytes = digits.as_bytes();
    let n = bytes.len();
    VerificationDigits {
        first: bytes[n - 2] - b'0',
        second: bytes[n - 1] - b'0',
    }
}

/// Cadastro de Pessoas Físicas: Brazilian individual taxpayer number.
///
/// Canonical form: 11 digits. Display form: `DDD.DDD.DDD-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF, validating format and verification digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the value is not an
    /// 11-digit CPF with matching verification digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match checked_digits(&raw, CPF_LEN) {
            Some(digits) => Ok(Self(digits.into_string())),
            None => Err(ValidationError::InvalidCpf(raw)),
        }
    }

    /// Access the CPF in canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in display form: `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format(&self.0, false).unwrap_or_else(|_| self.0.clone())
    }

    /// Return the partially hidden display form: `*.DDD.*-DD`.
    pub fn masked(&self) -> String {
        mask_cpf(&self.0).unwrap_or_else(|_| self.0.clone())
    }

    /// The two trailing verification digits.
    pub fn verification_digits(&self) -> VerificationDigits {
        trailing_digits(&self.0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Cadastro Nacional da Pessoa Jurídica: Brazilian organizational taxpayer number.
///
/// Canonical form: 14 digits. Display form: `DD.DDD.DDD/DDDD-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ, validating format and verification digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] if the value is not a
    /// 14-digit CNPJ with matching verification digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match checked_digits(&raw, CNPJ_LEN) {
            Some(digits) => Ok(Self(digits.into_string())),
            None => Err(ValidationError::InvalidCnpj(raw)),
        }
    }

    /// Access the CNPJ in canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CNPJ in display form: `DD.DDD.DDD/DDDD-DD`.
    pub fn formatted(&self) -> String {
        format(&self.0, false).unwrap_or_else(|_| self.0.clone())
    }

    /// The 8-digit root shared by every establishment of the organization.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit establishment number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// The two trailing verification digits.
    pub fn verification_digits(&self) -> VerificationDigits {
        trailing_digits(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Either kind of taxpayer identifier, dispatched on exact digit count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxId {
    /// An individual.
    Cpf(Cpf),
    /// An organization.
    Cnpj(Cnpj),
}

impl_validating_deserialize!(TaxId);

impl TaxId {
    /// Create a CPF (11 digits) or CNPJ (14 digits) from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTaxId`] when the value is neither.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let parsed = match extract_digits(&raw).len() {
            CPF_LEN => Cpf::new(raw.as_str()).ok().map(TaxId::Cpf),
            CNPJ_LEN => Cnpj::new(raw.as_str()).ok().map(TaxId::Cnpj),
            _ => None,
        };
        parsed.ok_or(ValidationError::InvalidTaxId(raw))
    }

    /// The identifier kind.
    pub fn kind(&self) -> Kind {
        match self {
            TaxId::Cpf(_) => Kind::Cpf,
            TaxId::Cnpj(_) => Kind::Cnpj,
        }
    }

    /// Canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            TaxId::Cpf(cpf) => cpf.as_str(),
            TaxId::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Display form of the underlying kind.
    pub fn formatted(&self) -> String {
        match self {
            TaxId::Cpf(cpf) => cpf.formatted(),
            TaxId::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl From<Cpf> for TaxId {
    fn from(cpf: Cpf) -> Self {
        TaxId::Cpf(cpf)
    }
}

impl From<Cnpj> for TaxId {
    fn from(cnpj: Cnpj) -> Self {
        TaxId::Cnpj(cnpj)
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Cpf --

    #[test]
    fn cpf_valid_digits() {
        let cpf = Cpf::new("11144477735").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
    }

    #[test]
    fn cpf_valid_formatted() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        assert_eq!(cpf.as_str(), "11144477735"); // stored without punctuation
        assert_eq!(cpf.formatted(), "111.444.777-35");
        assert_eq!(format!("{cpf}"), "111.444.777-35");
    }

    #[test]
    fn cpf_masked() {
        let cpf = Cpf::new("11144477735").unwrap();
        assert_eq!(cpf.masked(), "*.444.*-35");
    }

    #[test]
    fn cpf_verification_digits() {
        let cpf = Cpf::new("01234567890").unwrap();
        assert_eq!(cpf.verification_digits().to_string(), "90");
    }

    #[test]
    fn cpf_rejects_invalid() {
        assert!(Cpf::new("").is_err());
        assert!(Cpf::new("11144477736").is_err()); // wrong checksum
        assert!(Cpf::new("1234567890").is_err()); // 10 digits, no padding here
        assert!(Cpf::new("111x444x777x35").is_err()); // letters
        assert!(Cpf::new("11222333000181").is_err()); // a CNPJ
    }

    // -- Cnpj --

    #[test]
    fn cnpj_valid() {
        let cnpj = Cnpj::new("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
        assert_eq!(format!("{cnpj}"), "11.222.333/0001-81");
        assert_eq!(cnpj.root(), "11222333");
        assert_eq!(cnpj.branch(), "0001");
        assert_eq!(cnpj.verification_digits().to_string(), "81");
    }

    #[test]
    fn cnpj_rejects_invalid() {
        assert!(Cnpj::new("11222333000182").is_err());
        assert!(Cnpj::new("1122233300018").is_err());
        assert!(Cnpj::new("11144477735").is_err());
    }

    // -- TaxId --

    #[test]
    fn tax_id_dispatches_on_length() {
        let id = TaxId::new("111.444.777-35").unwrap();
        assert_eq!(id.kind(), Kind::Cpf);
        let id = TaxId::new("11222333000181").unwrap();
        assert_eq!(id.kind(), Kind::Cnpj);
        assert_eq!(id.to_string(), "11.222.333/0001-81");
    }

    #[test]
    fn tax_id_rejects_invalid() {
        assert!(matches!(
            TaxId::new("12345"),
            Err(ValidationError::InvalidTaxId(_))
        ));
        assert!(matches!(
            TaxId::new("11144477736"),
            Err(ValidationError::InvalidTaxId(_))
        ));
    }

    #[test]
    fn tax_id_from_newtypes() {
        let cpf = Cpf::new("11144477735").unwrap();
        let id: TaxId = cpf.clone().into();
        assert_eq!(id, TaxId::Cpf(cpf));
    }

    // -- Serde --

    #[test]
    fn cpf_serde_roundtrip() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        let json_str = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json_str, "\"11144477735\"");
        let deserialized: Cpf = serde_json::from_str(&json_str).unwrap();
        assert_eq!(cpf, deserialized);
    }

    #[test]
    fn cnpj_deserialize_rejects_bad_checksum() {
        let result: Result<Cnpj, _> = serde_json::from_str("\"11222333000182\"");
        assert!(result.is_err());
    }

    #[test]
    fn tax_id_serializes_as_plain_string() {
        let id = TaxId::new("11.222.333/0001-81").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"11222333000181\"");
        let back: TaxId = serde_json::from_str("\"11222333000181\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn cpf_in_hashset() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Cpf::new("11144477735").unwrap());
        set.insert(Cpf::new("111.444.777-35").unwrap());
        set.insert(Cpf::new("01234567890").unwrap());
        assert_eq!(set.len(), 2);
    }
}
