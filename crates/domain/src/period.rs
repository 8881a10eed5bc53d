//! Debt reporting period (`YYYYMM`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use debtcheck_core::{DomainError, DomainResult, ValueObject};

use crate::patterns;

/// Earliest accepted year.
pub const MIN_YEAR: u16 = 1900;

/// Calendar month a debt is reported for, e.g. `202501`.
///
/// Invariants:
/// - six ASCII digits
/// - year >= 1900
/// - month in 1..=12
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DebtPeriod {
    value: String,
    year: u16,
    month: u8,
}

impl DebtPeriod {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_format("DebtPeriod cannot be empty"));
        }

        let (year, month) = patterns::DEBT_PERIOD
            .captures(&value)
            .and_then(|caps| Some((caps[1].parse::<u16>().ok()?, caps[2].parse::<u8>().ok()?)))
            .ok_or_else(|| {
                tracing::debug!(input = %value, "rejected DebtPeriod: bad format");
                DomainError::invalid_format(format!("DebtPeriod must be YYYYMM: {value}"))
            })?;

        if !(1..=12).contains(&month) {
            return Err(DomainError::out_of_range(format!(
                "DebtPeriod month must be 01-12: {value}"
            )));
        }
        if year < MIN_YEAR {
            return Err(DomainError::out_of_range(format!(
                "DebtPeriod year must be >= {MIN_YEAR}: {value}"
            )));
        }

        Ok(Self { value, year, month })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl ValueObject for DebtPeriod {}

impl core::fmt::Display for DebtPeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for DebtPeriod {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for DebtPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DebtPeriod {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DebtPeriod> for String {
    fn from(value: DebtPeriod) -> Self {
        value.value
    }
}
