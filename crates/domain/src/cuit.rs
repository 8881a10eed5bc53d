//! CUIT (Clave Única de Identificación Tributaria), the Argentine tax id.
//!
//! A CUIT has 11 digits; the last one is a verifier computed with the AFIP
//! weighted mod-11 algorithm over the first ten. Input may carry dashes
//! (`30-51170725-7`) and surrounding whitespace; the canonical value is the bare
//! 11-digit string.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use debtcheck_core::{DomainError, DomainResult, ValueObject};

use crate::patterns;

/// Weights applied positionally to the first ten digits.
const COEFFICIENTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Validated, dash-free CUIT.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cuit(String);

impl Cuit {
    /// Normalize and validate a CUIT.
    ///
    /// Fails with `InvalidFormat` unless exactly 11 digits remain after removing
    /// dashes and trimming, and with `ChecksumMismatch` when the 11th digit is not
    /// the computed verifier.
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let raw = raw.as_ref();
        let cleaned = raw.replace('-', "");
        let cleaned = cleaned.trim();

        if !patterns::CUIT.is_match(cleaned) {
            tracing::debug!(input = raw, "rejected CUIT: bad format");
            return Err(DomainError::invalid_format(format!("Invalid CUIT format: {raw}")));
        }

        let digits = to_digits(cleaned);
        let expected = verifier(&digits[..10]);
        if u32::from(digits[10]) != expected {
            tracing::debug!(input = raw, expected, "rejected CUIT: verifier mismatch");
            return Err(DomainError::checksum_mismatch(format!(
                "Invalid verifier digit for CUIT: {raw}"
            )));
        }

        Ok(Self(cleaned.to_string()))
    }

    /// Canonical 11-digit value.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Conventional dashed rendering, `XX-XXXXXXXX-X`.
    pub fn formatted(&self) -> String {
        format!("{}-{}-{}", &self.0[..2], &self.0[2..10], &self.0[10..])
    }

    /// Verifier digit for a 10-digit CUIT prefix.
    ///
    /// Returns `None` when `prefix` is not exactly ten ASCII digits, or when the
    /// algorithm yields 10 (no single digit can complete such a prefix).
    pub fn verifier_for(prefix: &str) -> Option<u8> {
        if prefix.len() != 10 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = to_digits(prefix);
        u8::try_from(verifier(&digits)).ok().filter(|d| *d <= 9)
    }
}

/// AFIP verifier: `11 - (Σ cᵢ·dᵢ mod 11)`, with 11 and a zero remainder both
/// mapping to 0. A remainder of 1 yields 10, which matches no digit.
fn verifier(first_ten: &[u8]) -> u32 {
    let sum: u32 = COEFFICIENTS
        .iter()
        .zip(first_ten)
        .map(|(c, d)| c * u32::from(*d))
        .sum();
    let rem = sum % 11;
    if rem == 0 { 0 } else { 11 - rem }
}

/// Caller guarantees `s` is ASCII digits only.
fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

impl ValueObject for Cuit {}

impl core::fmt::Display for Cuit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cuit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cuit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cuit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cuit> for String {
    fn from(value: Cuit) -> Self {
        value.0
    }
}
