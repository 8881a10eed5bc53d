//! Compiled input patterns shared by the value objects.
//!
//! Patterns are anchored: a value must match in full, not merely contain a match.
//! Digit classes are ASCII-only.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

pub(crate) static CUIT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{11}$"));

pub(crate) static CHECK_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{6,8}$"));

/// `YYYYMM`, captured as (year, month). Range checks happen after the match.
pub(crate) static DEBT_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]{4})([0-9]{2})$"));

/// Deliberately permissive: `local@domain.tld` with no `@` anywhere else.
pub(crate) static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^@]+@[^@]+\.[^@]+$"));
