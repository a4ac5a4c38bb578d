//! Errors raised at the boundary of the fire danger library
//!
//! The calculation engine itself never fails: every step clamps its output.
//! These errors cover parsing names and converting partial station data.

use thiserror::Error;

/// Errors that can occur while building engine inputs or parsing names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NfdrsError {
    /// Fire danger class name not recognised
    #[error("Unknown fire danger class: {0}")]
    UnknownFireDangerClass(String),

    /// Fuel model identifier not recognised
    #[error("Unknown fuel model: {0}")]
    UnknownFuelModel(String),

    /// A station reading lacks a value needed to build an observation
    #[error("Station reading is missing {0}")]
    MissingField(&'static str),
}
