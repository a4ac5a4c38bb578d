//! Weather observations consumed by the fire danger engine
//!
//! A [`WeatherObservation`] is a single 24-hour station reading in US
//! customary units. Nothing here validates physical plausibility: a humidity
//! of 150% or a negative wind speed is carried through unchanged and the
//! engine clamps its outputs instead.

use crate::core_types::units::{Fahrenheit, Inches, Langleys, MilesPerHour, Percent};
use serde::{Deserialize, Serialize};

/// Weather station data for fire danger calculations
///
/// Immutable once constructed. The `with_*` methods return a modified copy.
///
/// # Example
/// ```
/// use nfdrs_core::core_types::{Fahrenheit, Inches, MilesPerHour, Percent};
/// use nfdrs_core::WeatherObservation;
///
/// let obs = WeatherObservation::new(
///     Fahrenheit::new(95.0),
///     Percent::new(15.0),
///     MilesPerHour::new(30.0),
/// );
/// assert_eq!(obs.precipitation(), Inches::ZERO);
///
/// let wet = obs.with_precipitation(Inches::new(0.5));
/// assert_eq!(*wet.precipitation(), 0.5);
/// assert_eq!(obs.precipitation(), Inches::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (°F)
    temperature: Fahrenheit,
    /// Relative humidity (%)
    relative_humidity: Percent,
    /// Wind speed (mph)
    wind_speed: MilesPerHour,
    /// Precipitation over the last 24 hours (inches)
    #[serde(default)]
    precipitation: Inches,
    /// Solar radiation (langleys)
    ///
    /// Carried for completeness; no fire danger formula reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solar_radiation: Option<Langleys>,
}

impl WeatherObservation {
    /// Create an observation with no precipitation and no solar radiation
    #[must_use]
    pub fn new(
        temperature: Fahrenheit,
        relative_humidity: Percent,
        wind_speed: MilesPerHour,
    ) -> Self {
        WeatherObservation {
            temperature,
            relative_humidity,
            wind_speed,
            precipitation: Inches::ZERO,
            solar_radiation: None,
        }
    }

    /// Convenience constructor from raw °F, %, mph and inches
    #[must_use]
    pub fn from_raw(
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        precipitation: f64,
    ) -> Self {
        WeatherObservation::new(
            Fahrenheit::new(temperature),
            Percent::new(relative_humidity),
            MilesPerHour::new(wind_speed),
        )
        .with_precipitation(Inches::new(precipitation))
    }

    /// Copy of this observation with the given 24-hour precipitation
    #[must_use]
    pub fn with_precipitation(self, precipitation: Inches) -> Self {
        WeatherObservation {
            precipitation,
            ..self
        }
    }

    /// Copy of this observation with the given solar radiation
    #[must_use]
    pub fn with_solar_radiation(self, solar_radiation: Langleys) -> Self {
        WeatherObservation {
            solar_radiation: Some(solar_radiation),
            ..self
        }
    }

    pub fn temperature(&self) -> Fahrenheit {
        self.temperature
    }

    pub fn relative_humidity(&self) -> Percent {
        self.relative_humidity
    }

    pub fn wind_speed(&self) -> MilesPerHour {
        self.wind_speed
    }

    pub fn precipitation(&self) -> Inches {
        self.precipitation
    }

    pub fn solar_radiation(&self) -> Option<Langleys> {
        self.solar_radiation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_precipitation() {
        let obs: WeatherObservation = serde_json::from_str(
            r#"{"temperature": 88.0, "relative_humidity": 22.0, "wind_speed": 14.0}"#,
        )
        .unwrap();

        assert_eq!(obs.precipitation(), Inches::ZERO);
        assert_eq!(obs.solar_radiation(), None);
        assert_eq!(*obs.temperature(), 88.0);
    }

    #[test]
    fn test_deserialize_rejects_missing_required_field() {
        let err = serde_json::from_str::<WeatherObservation>(
            r#"{"temperature": 88.0, "wind_speed": 14.0}"#,
        )
        .unwrap_err();

        assert!(
            err.to_string().contains("relative_humidity"),
            "Unexpected error: {err}"
        );
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_field() {
        let result = serde_json::from_str::<WeatherObservation>(
            r#"{"temperature": "hot", "relative_humidity": 22.0, "wind_speed": 14.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_solar_radiation_round_trips() {
        let obs = WeatherObservation::from_raw(80.0, 30.0, 5.0, 0.0)
            .with_solar_radiation(Langleys::new(650.0));
        let json = serde_json::to_string(&obs).unwrap();
        let back: WeatherObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
