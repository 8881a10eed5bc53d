//! Debt-check domain model.
//!
//! Self-validating value objects (CUIT, periods, emails, identifiers) and the
//! identity-compared entities built on them. Pure domain logic: no IO, no
//! storage, no HTTP.

#[macro_use]
mod identity;
mod patterns;

pub mod check;
pub mod cuit;
pub mod email;
pub mod enums;
pub mod id;
pub mod period;
pub mod persona;
pub mod request;
pub mod user;

pub use check::CheckNumber;
pub use cuit::Cuit;
pub use email::EmailAddress;
pub use enums::{FineStatus, RequestStatus, RequestType, RiskClassification, RiskLevel};
pub use id::{DebtCheckRequestId, UserId};
pub use period::DebtPeriod;
pub use persona::PersonaFisicaJuridica;
pub use request::DebtCheckRequest;
pub use user::User;

pub use debtcheck_core::{DomainError, DomainResult, Entity, EntityKey, ValueObject};
