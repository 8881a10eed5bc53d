//! Entity identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use debtcheck_core::{DomainError, DomainResult, ValueObject};

/// Identifier of a user.
///
/// Any non-blank string is accepted verbatim. Fresh ids come from
/// [`UserId::generate`]; tests should pass explicit ids for determinism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Wrap an explicit identifier. Fails when it is empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            tracing::debug!("rejected UserId: blank");
            return Err(DomainError::invalid_format("UserId cannot be empty"));
        }
        Ok(Self(value))
    }

    /// Create a new, globally unique identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::generate()
    }
}

impl ValueObject for UserId {}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Identifier of a debt-check request. Strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DebtCheckRequestId(i64);

impl DebtCheckRequestId {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            tracing::debug!(value, "rejected DebtCheckRequestId: not positive");
            return Err(DomainError::out_of_range(format!(
                "DebtCheckRequestId must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ValueObject for DebtCheckRequestId {}

impl core::fmt::Display for DebtCheckRequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DebtCheckRequestId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_format(format!("DebtCheckRequestId: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for DebtCheckRequestId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DebtCheckRequestId> for i64 {
    fn from(value: DebtCheckRequestId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_user_ids_are_non_empty_and_unique() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert!(!a.value().is_empty());
        assert_ne!(a, b);
        assert_ne!(UserId::default(), a);
    }

    #[test]
    fn custom_user_id_is_kept_verbatim() {
        let id = UserId::new("custom-id").unwrap();
        assert_eq!(id.value(), "custom-id");
        assert_eq!(UserId::new(id.value()).unwrap(), id);
    }

    #[test]
    fn blank_user_id_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = UserId::new(raw).unwrap_err();
            assert!(matches!(err, DomainError::InvalidFormat(_)), "input {raw:?}");
        }
    }

    #[test]
    fn request_id_accepts_positive_values() {
        let id = DebtCheckRequestId::new(10).unwrap();
        assert_eq!(id.value(), 10);
        assert_eq!(DebtCheckRequestId::new(id.value()).unwrap(), id);
        assert_eq!("10".parse::<DebtCheckRequestId>().unwrap(), id);
    }

    #[test]
    fn request_id_rejects_zero_and_negative() {
        for raw in [0, -1, i64::MIN] {
            let err = DebtCheckRequestId::new(raw).unwrap_err();
            assert!(matches!(err, DomainError::OutOfRange(_)), "input {raw}");
        }
        assert_eq!(
            "ten".parse::<DebtCheckRequestId>().unwrap_err().kind(),
            "invalid_format"
        );
    }

    #[test]
    fn ids_serialize_as_raw_values() {
        let id = DebtCheckRequestId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert!(serde_json::from_str::<DebtCheckRequestId>("0").is_err());

        let user = UserId::new("u-1").unwrap();
        assert_eq!(serde_json::to_string(&user).unwrap(), "\"u-1\"");
        assert!(serde_json::from_str::<UserId>("\"  \"").is_err());
    }
}
