use core::str::FromStr;
use serde::{Deserialize, Serialize};

use debtcheck_core::{DomainError, DomainResult, ValueObject};

use crate::patterns;

/// Email address checked against a minimal `local@domain.tld` shape.
///
/// The check is intentionally lenient and not RFC 5322 complete; callers rely on
/// exactly this acceptance set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !patterns::EMAIL.is_match(&value) {
            tracing::debug!(input = %value, "rejected EmailAddress: bad format");
            return Err(DomainError::invalid_format(format!("Invalid email address: {value}")));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for EmailAddress {}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_address_is_accepted() {
        let email = EmailAddress::new("usuario@dominio.com").unwrap();
        assert_eq!(email.value(), "usuario@dominio.com");
    }

    #[test]
    fn missing_at_or_dot_or_empty_is_rejected() {
        for raw in ["usuariodominio.com", "usuario@dominio", "", "@dominio.com", "a@b@c.com"] {
            let err = EmailAddress::new(raw).unwrap_err();
            assert_eq!(err.kind(), "invalid_format", "input {raw:?}");
        }
    }

    #[test]
    fn leniency_is_preserved() {
        // Not RFC-valid, accepted anyway.
        for raw in ["a b@c.d", "x@.y.z", "user@domain..com"] {
            assert!(EmailAddress::new(raw).is_ok(), "input {raw:?}");
        }
    }
}
