//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic function of the rejected input: the same
/// input always yields the same error. Callers decide how to present, log or
/// retry; nothing in the domain layer recovers locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Raw input does not have the required shape (regex, length, emptiness).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Input is well-formed but outside the allowed domain
    /// (e.g. month 13, year before 1900, non-positive id).
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A check digit did not match the computed one.
    #[error("checksum mismatch: {0}")]
    ChecksumMismatch(String),

    /// An entity identifier was reassigned after construction.
    #[error("identity is immutable: {0}")]
    ImmutableIdentity(String),
}

impl DomainError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn checksum_mismatch(msg: impl Into<String>) -> Self {
        Self::ChecksumMismatch(msg.into())
    }

    pub fn immutable_identity(msg: impl Into<String>) -> Self {
        Self::ImmutableIdentity(msg.into())
    }

    /// Stable machine-readable tag for the error kind.
    ///
    /// Outer layers map this to their own rejection codes (HTTP status,
    /// rejected-record reason, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidFormat(_) => "invalid_format",
            DomainError::OutOfRange(_) => "out_of_range",
            DomainError::ChecksumMismatch(_) => "checksum_mismatch",
            DomainError::ImmutableIdentity(_) => "immutable_identity",
        }
    }
}
