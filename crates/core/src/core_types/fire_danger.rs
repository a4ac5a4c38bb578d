//! Fire danger classes and calculation results

use crate::core_types::units::Percent;
use crate::error::NfdrsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Burning index threshold constants for the NFDRS fire danger classes.
///
/// Rust `Range` types use **inclusive lower bound and exclusive upper bound** [a, b),
/// so a burning index sitting exactly on a boundary belongs to the higher class.
pub mod burning_index_ranges {
    use std::ops::{Range, RangeFrom, RangeTo};

    /// "LOW" fire danger `(-∞, 25.0)`
    pub const LOW: RangeTo<f64> = ..25.0;

    /// "MODERATE" fire danger `[25.0, 50.0)`
    pub const MODERATE: Range<f64> = 25.0..50.0;

    /// "HIGH" fire danger `[50.0, 75.0)`
    pub const HIGH: Range<f64> = 50.0..75.0;

    /// "VERY HIGH" fire danger `[75.0, 90.0)`
    pub const VERY_HIGH: Range<f64> = 75.0..90.0;

    /// "EXTREME" fire danger `[90.0, ∞)`
    pub const EXTREME: RangeFrom<f64> = 90.0..;
}

/// Ordered NFDRS fire danger class
///
/// # Example
/// ```
/// use nfdrs_core::FireDangerClass;
///
/// assert_eq!(FireDangerClass::from_burning_index(24.999), FireDangerClass::Low);
/// assert_eq!(FireDangerClass::from_burning_index(25.0), FireDangerClass::Moderate);
/// assert_eq!(FireDangerClass::VeryHigh.to_string(), "VERY HIGH");
/// assert!(FireDangerClass::Extreme > FireDangerClass::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FireDangerClass {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "VERY HIGH")]
    VeryHigh,
    #[serde(rename = "EXTREME")]
    Extreme,
}

impl FireDangerClass {
    /// All classes, lowest first
    pub const ALL: [FireDangerClass; 5] = [
        FireDangerClass::Low,
        FireDangerClass::Moderate,
        FireDangerClass::High,
        FireDangerClass::VeryHigh,
        FireDangerClass::Extreme,
    ];

    /// Classify a burning index.
    ///
    /// Total over `f64`: anything not below 90 (including NaN) is EXTREME.
    pub fn from_burning_index(burning_index: f64) -> Self {
        use burning_index_ranges::{HIGH, LOW, MODERATE, VERY_HIGH};

        match burning_index {
            bi if LOW.contains(&bi) => FireDangerClass::Low,
            bi if MODERATE.contains(&bi) => FireDangerClass::Moderate,
            bi if HIGH.contains(&bi) => FireDangerClass::High,
            bi if VERY_HIGH.contains(&bi) => FireDangerClass::VeryHigh,
            _ => FireDangerClass::Extreme,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FireDangerClass::Low => "LOW",
            FireDangerClass::Moderate => "MODERATE",
            FireDangerClass::High => "HIGH",
            FireDangerClass::VeryHigh => "VERY HIGH",
            FireDangerClass::Extreme => "EXTREME",
        }
    }
}

impl fmt::Display for FireDangerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FireDangerClass {
    type Err = NfdrsError;

    /// Case-insensitive; accepts `VERY HIGH`, `VERY_HIGH` and `Very High`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['_', '-'], " ");
        FireDangerClass::ALL
            .into_iter()
            .find(|class| class.as_str() == normalized)
            .ok_or_else(|| NfdrsError::UnknownFireDangerClass(s.to_string()))
    }
}

/// Complete fire danger calculation results
///
/// Only the engine constructs these, so every field is guaranteed to lie in
/// its clamp range:
///
/// | Field | Range |
/// |---|---|
/// | dead fuel moisture | 1-35 % |
/// | spread component | 0-99 |
/// | energy release component | 0-97 |
/// | burning index | 0-999 |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireDangerResult {
    dead_fuel_moisture: Percent,
    live_fuel_moisture: Percent,
    spread_component: f64,
    energy_release_component: f64,
    burning_index: f64,
    fire_danger_class: FireDangerClass,
}

impl FireDangerResult {
    pub(crate) fn new(
        dead_fuel_moisture: Percent,
        live_fuel_moisture: Percent,
        spread_component: f64,
        energy_release_component: f64,
        burning_index: f64,
    ) -> Self {
        FireDangerResult {
            dead_fuel_moisture,
            live_fuel_moisture,
            spread_component,
            energy_release_component,
            burning_index,
            fire_danger_class: FireDangerClass::from_burning_index(burning_index),
        }
    }

    /// 1-hour dead fuel moisture (%)
    pub fn dead_fuel_moisture(&self) -> Percent {
        self.dead_fuel_moisture
    }

    /// Live fuel moisture the calculation used (%)
    pub fn live_fuel_moisture(&self) -> Percent {
        self.live_fuel_moisture
    }

    pub fn spread_component(&self) -> f64 {
        self.spread_component
    }

    pub fn energy_release_component(&self) -> f64 {
        self.energy_release_component
    }

    pub fn burning_index(&self) -> f64 {
        self.burning_index
    }

    pub fn fire_danger_class(&self) -> FireDangerClass {
        self.fire_danger_class
    }
}

impl fmt::Display for FireDangerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (BI {:.1}, SC {:.1}, ERC {:.1}, dead FM {}, live FM {})",
            self.fire_danger_class,
            self.burning_index,
            self.spread_component,
            self.energy_release_component,
            self.dead_fuel_moisture,
            self.live_fuel_moisture,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries_belong_to_higher_class() {
        let cases = [
            (24.999, FireDangerClass::Low),
            (25.0, FireDangerClass::Moderate),
            (49.999, FireDangerClass::Moderate),
            (50.0, FireDangerClass::High),
            (74.999, FireDangerClass::High),
            (75.0, FireDangerClass::VeryHigh),
            (89.999, FireDangerClass::VeryHigh),
            (90.0, FireDangerClass::Extreme),
        ];

        for (bi, expected) in cases {
            assert_eq!(
                FireDangerClass::from_burning_index(bi),
                expected,
                "Burning index {} misclassified",
                bi
            );
        }
    }

    #[test]
    fn test_out_of_domain_burning_index() {
        assert_eq!(FireDangerClass::from_burning_index(-5.0), FireDangerClass::Low);
        assert_eq!(
            FireDangerClass::from_burning_index(f64::NEG_INFINITY),
            FireDangerClass::Low
        );
        assert_eq!(FireDangerClass::from_burning_index(999.0), FireDangerClass::Extreme);
        assert_eq!(
            FireDangerClass::from_burning_index(f64::NAN),
            FireDangerClass::Extreme
        );
    }

    #[test]
    fn test_class_names_parse_back() {
        for class in FireDangerClass::ALL {
            assert_eq!(class.to_string().parse::<FireDangerClass>(), Ok(class));
        }
        assert_eq!("very_high".parse::<FireDangerClass>(), Ok(FireDangerClass::VeryHigh));
        assert_eq!("Very High".parse::<FireDangerClass>(), Ok(FireDangerClass::VeryHigh));
        assert!("SEVERE".parse::<FireDangerClass>().is_err());
    }

    #[test]
    fn test_class_serializes_as_upper_case_name() {
        let json = serde_json::to_string(&FireDangerClass::VeryHigh).unwrap();
        assert_eq!(json, "\"VERY HIGH\"");
    }

    #[test]
    fn test_result_derives_class_from_burning_index() {
        let result =
            FireDangerResult::new(Percent::new(4.0), Percent::new(120.0), 12.0, 70.0, 80.0);
        assert_eq!(result.fire_danger_class(), FireDangerClass::VeryHigh);
        assert!(result.to_string().starts_with("VERY HIGH (BI 80.0"));
    }
}
