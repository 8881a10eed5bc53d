use core::str::FromStr;
use serde::{Deserialize, Serialize};

use debtcheck_core::{DomainError, DomainResult, ValueObject};

use crate::patterns;

/// Cheque number: 6 to 8 ASCII digits, stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckNumber(String);

impl CheckNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_format("CheckNumber cannot be empty"));
        }
        if !patterns::CHECK_NUMBER.is_match(&value) {
            tracing::debug!(input = %value, "rejected CheckNumber: bad format");
            return Err(DomainError::invalid_format(format!(
                "CheckNumber must be 6 to 8 digits: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CheckNumber {}

impl core::fmt::Display for CheckNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CheckNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CheckNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CheckNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CheckNumber> for String {
    fn from(value: CheckNumber) -> Self {
        value.0
    }
}
