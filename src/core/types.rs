// src/core/types.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::DATA_TYPES;

/// Metric endpoint to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    CarbonIntensity,
    ElectricityMix,
}

impl DataType {
    pub const ALL: [DataType; 2] = [DataType::CarbonIntensity, DataType::ElectricityMix];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::CarbonIntensity => DATA_TYPES[0],
            DataType::ElectricityMix => DATA_TYPES[1],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataType::CarbonIntensity => "Carbon intensity",
            DataType::ElectricityMix => "Electricity mix",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Exact match only; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| format!("Unknown data type: {s:?}"))
    }
}

/// One validated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub data_type: DataType,
    /// Trimmed + uppercased region code.
    pub region: String,
    pub api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchResult {
    Success { payload: Value },
    Failure { message: String },
}

impl FetchResult {
    pub fn failure(message: impl Into<String>) -> Self {
        FetchResult::Failure { message: message.into() }
    }
}

/// Display-ready fields pulled out of an API payload.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedReading {
    pub zone: String,
    /// Number or string as the API sent it, or the "N/A" sentinel.
    pub carbon: Value,
    pub fossil_fuel: Value,
}
