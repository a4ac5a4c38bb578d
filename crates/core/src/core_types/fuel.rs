//! NFDRS fuel models

use crate::error::NfdrsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFDRS fuel model identifier
///
/// Only the standard grass model is supported. The engine stores the model it
/// was built with but the current formulas do not vary by fuel model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelModel {
    /// Fuel model G: standard grass
    #[default]
    #[serde(rename = "G")]
    G,
}

impl FuelModel {
    /// Single-letter NFDRS identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelModel::G => "G",
        }
    }

    /// Descriptive name
    pub fn name(&self) -> &'static str {
        match self {
            FuelModel::G => "Standard grass",
        }
    }
}

impl fmt::Display for FuelModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelModel {
    type Err = NfdrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "G" | "g" => Ok(FuelModel::G),
            other => Err(NfdrsError::UnknownFuelModel(other.to_string())),
        }
    }
}
