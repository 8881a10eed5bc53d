//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by the value
//! they hold. Two value objects holding the same value are equal and hash the same.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two `Cuit`s holding the same digits are equal)
/// - **Entity**: has identity (two `User`s with the same `UserId` are the same user)
///
/// ## Construction
///
/// Implementors validate in their constructor and return a `DomainResult`, so a
/// half-valid instance is never observable. Once built, the held value never
/// changes; to "modify" a value object, construct a new one.
///
/// ## Design Constraints
///
/// - **Clone**: values are cheap to copy around
/// - **Eq + Hash**: structural equality over every held field, usable as map keys
/// - **Debug**: shows up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct CheckNumber(String);
///
/// impl ValueObject for CheckNumber {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
