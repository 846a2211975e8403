use std::{fmt, str::FromStr};

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Administrative classification of the ledger, fixed at instantiation.
///
/// Persisted and exposed as an ordinal, `Medium` being `1`, to match the
/// on-wire constructor parameter. It has no behavioral effect.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = ContractError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            _ => Err(ContractError::UnknownRiskLevel(ordinal)),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = ContractError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ContractError::UnknownRiskLevelName(label.into())),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for RiskLevel {
    fn schema_name() -> String {
        "RiskLevel".into()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        u8::json_schema(gen)
    }
}
