//! Real-time fire weather index from partial station readings
//!
//! Live station feeds routinely drop fields. This module grades how complete
//! a reading is, normalises raw measurement units, and computes a quick
//! composite fire weather index from whatever is available. Complete readings
//! convert into a [`WeatherObservation`] for the full NFDRS engine.

use crate::core_types::units::{Celsius, Fahrenheit, KilometersPerHour, MilesPerHour, Percent};
use crate::core_types::weather::WeatherObservation;
use crate::error::NfdrsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Feet per metre
const FEET_PER_METER: f64 = 3.28084;

/// Grade of a station reading by how many core fields it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataQuality {
    /// No temperature, humidity or wind
    Poor,
    /// One of the three
    Fair,
    /// Two of the three
    Good,
    /// Temperature, humidity and wind all present
    Excellent,
}

impl DataQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataQuality::Poor => "POOR",
            DataQuality::Fair => "FAIR",
            DataQuality::Good => "GOOD",
            DataQuality::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A possibly incomplete reading from a weather station
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationReading {
    pub temperature: Option<Fahrenheit>,
    pub relative_humidity: Option<Percent>,
    pub wind_speed: Option<MilesPerHour>,
    /// Direction the wind blows from (degrees true)
    pub wind_direction: Option<f64>,
}

impl StationReading {
    /// Grade the reading by how many of temperature, humidity and wind are present
    pub fn data_quality(&self) -> DataQuality {
        let available = [
            self.temperature.is_some(),
            self.relative_humidity.is_some(),
            self.wind_speed.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count();

        match available {
            3 => DataQuality::Excellent,
            2 => DataQuality::Good,
            1 => DataQuality::Fair,
            _ => DataQuality::Poor,
        }
    }

    /// Build a full observation for the NFDRS engine
    ///
    /// Station feeds carry no 24-hour precipitation total, so the observation
    /// has none.
    ///
    /// # Errors
    /// [`NfdrsError::MissingField`] if temperature, humidity or wind is absent.
    pub fn to_observation(&self) -> Result<WeatherObservation, NfdrsError> {
        let temperature = self
            .temperature
            .ok_or(NfdrsError::MissingField("temperature"))?;
        let relative_humidity = self
            .relative_humidity
            .ok_or(NfdrsError::MissingField("relative_humidity"))?;
        let wind_speed = self
            .wind_speed
            .ok_or(NfdrsError::MissingField("wind_speed"))?;

        Ok(WeatherObservation::new(
            temperature,
            relative_humidity,
            wind_speed,
        ))
    }
}

/// Composite fire weather index and its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireWeatherIndex {
    /// Mean of the three factors
    pub fire_weather_index: f64,
    /// Dryness factor from humidity (0-10)
    pub drought_factor: f64,
    /// Wind factor (at most 10, 1.0 when calm or unknown)
    pub wind_factor: f64,
    /// Warmth factor above freezing (>= 0)
    pub temperature_factor: f64,
    pub data_quality: DataQuality,
}

/// Calculate the fire weather index for a station reading
///
/// # Formula
/// ```text
/// drought     = clamp((100 − RH) / 10, 0, 10)
/// wind        = min(10, V / 5)              (1.0 if calm or missing)
/// temperature = max(0, (T − 32) / 10)
/// FWI         = (drought + wind + temperature) / 3
/// ```
///
/// # Returns
/// `None` when temperature or humidity is missing or exactly zero, since a
/// zero from a station feed almost always means "not reported".
///
/// # Example
/// ```
/// use nfdrs_core::core_types::{Fahrenheit, MilesPerHour, Percent};
/// use nfdrs_core::fire_weather::{calculate_fire_weather_index, DataQuality, StationReading};
///
/// let reading = StationReading {
///     temperature: Some(Fahrenheit::new(92.0)),
///     relative_humidity: Some(Percent::new(10.0)),
///     wind_speed: Some(MilesPerHour::new(25.0)),
///     wind_direction: None,
/// };
///
/// let fwi = calculate_fire_weather_index(&reading).unwrap();
/// assert!((fwi.fire_weather_index - 6.666_666).abs() < 1e-3);
/// assert_eq!(fwi.data_quality, DataQuality::Excellent);
/// ```
pub fn calculate_fire_weather_index(reading: &StationReading) -> Option<FireWeatherIndex> {
    let (Some(temperature), Some(humidity)) = (reading.temperature, reading.relative_humidity)
    else {
        debug!(?reading, "Insufficient data for fire weather index");
        return None;
    };
    if *temperature == 0.0 || *humidity == 0.0 {
        debug!(?reading, "Unreported temperature or humidity");
        return None;
    }

    let drought_factor = ((100.0 - *humidity) / 10.0).clamp(0.0, 10.0);

    let wind_factor = match reading.wind_speed {
        Some(wind) if *wind != 0.0 => (*wind / 5.0).min(10.0),
        _ => 1.0,
    };

    let temperature_factor = ((*temperature - 32.0) / 10.0).max(0.0);

    let fire_weather_index = (drought_factor + wind_factor + temperature_factor) / 3.0;

    Some(FireWeatherIndex {
        fire_weather_index,
        drought_factor,
        wind_factor,
        temperature_factor,
        data_quality: reading.data_quality(),
    })
}

/// Convert a raw station measurement into the units the engine uses
///
/// Matches on the measurement's unit code:
/// - Celsius (`degC`, `celsius`) → °F
/// - kilometres (`kilometer`, `km_h-1`) → mph
/// - metres that are not a wind quantity → feet
/// - anything else is returned unchanged
pub fn normalize_measurement(value: f64, unit_code: &str) -> f64 {
    let lower = unit_code.to_ascii_lowercase();

    if lower.contains("celsius") || unit_code.contains("degC") {
        *Celsius::new(value).to_fahrenheit()
    } else if lower.contains("kilometer") || lower.contains("km_h-1") {
        *KilometersPerHour::new(value).to_mph()
    } else if lower.contains("meter") && !lower.contains("wind") {
        value * FEET_PER_METER
    } else {
        value
    }
}
