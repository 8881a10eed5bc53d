//! Closed classification sets used by debt checks.
//!
//! Each enum serializes to a stable snake_case wire name.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use debtcheck_core::DomainError;

macro_rules! impl_wire_enum {
    ($t:ident, $name:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $t {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            /// Stable wire name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($t::$variant => $wire),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($t::$variant),)+
                    other => Err(DomainError::invalid_format(format!(
                        "unknown {}: {other}",
                        $name
                    ))),
                }
            }
        }
    };
}

/// Status of a fine attached to a debtor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineStatus {
    Unpaid,
    Suspended,
}

/// Debtor classification as reported by the central bank debt registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClassification {
    Normal,
    SpecialMonitoring,
    WithProblems,
    HighRiskOfInsolvency,
    Irrecoverable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Normal,
    Low,
    Medium,
    High,
    Irrecoverable,
}

/// How a debt check was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Single,
    Batch,
    Monitoring,
}

/// Outcome of a debt check request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Successful,
    Error,
    Timeout,
}

impl_wire_enum!(FineStatus, "FineStatus", {
    Unpaid => "unpaid",
    Suspended => "suspended",
});

impl_wire_enum!(RiskClassification, "RiskClassification", {
    Normal => "normal",
    SpecialMonitoring => "special_monitoring",
    WithProblems => "with_problems",
    HighRiskOfInsolvency => "high_risk_of_insolvency",
    Irrecoverable => "irrecoverable",
});

impl_wire_enum!(RiskLevel, "RiskLevel", {
    Normal => "normal",
    Low => "low",
    Medium => "medium",
    High => "high",
    Irrecoverable => "irrecoverable",
});

impl_wire_enum!(RequestType, "RequestType", {
    Single => "single",
    Batch => "batch",
    Monitoring => "monitoring",
});

impl_wire_enum!(RequestStatus, "RequestStatus", {
    Successful => "successful",
    Error => "error",
    Timeout => "timeout",
});
