//! NFDRS Fire Danger Core Library
//!
//! A deterministic implementation of the simplified National Fire Danger
//! Rating System (NFDRS) calculations used for wildfire risk reporting.
//! Turns a daily weather observation into standardised fire danger indices
//! and a risk classification.
//!
//! ## Calculation pipeline
//!
//! 1. Dead fuel moisture from humidity, temperature and rain
//! 2. Spread component from wind and dead fuel moisture
//! 3. Energy release component from dead and live fuel moisture
//! 4. Burning index from spread and energy release
//! 5. Fire danger class (LOW → EXTREME) from the burning index
//!
//! Every step clamps its output, so the engine never rejects an input.
//!
//! ## Example
//!
//! ```
//! use nfdrs_core::{calculate_fire_danger, FireDangerClass, WeatherObservation};
//!
//! // Cold, wet and calm
//! let weather = WeatherObservation::from_raw(60.0, 90.0, 2.0, 0.5);
//! let result = calculate_fire_danger(&weather, None);
//!
//! assert_eq!(result.fire_danger_class(), FireDangerClass::Low);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Calculation steps and the engine that sequences them
pub mod engine;
pub mod physics;

// Real-time station helpers
pub mod fire_weather;

// Re-export core types
pub use core_types::{burning_index_ranges, FireDangerClass, FireDangerResult};
pub use core_types::{FuelModel, WeatherObservation};
pub use engine::{NfdrsEngine, DEFAULT_LIVE_FUEL_MOISTURE};
pub use error::NfdrsError;
pub use fire_weather::{DataQuality, FireWeatherIndex, StationReading};

use core_types::units::Percent;

/// Shared engine for the standard grass fuel model
static DEFAULT_ENGINE: NfdrsEngine = NfdrsEngine::new(FuelModel::G);

/// Fire danger for an observation using the standard grass fuel model
///
/// `live_fuel_moisture` defaults to [`DEFAULT_LIVE_FUEL_MOISTURE`] (120%).
pub fn calculate_fire_danger(
    weather: &WeatherObservation,
    live_fuel_moisture: Option<Percent>,
) -> FireDangerResult {
    DEFAULT_ENGINE.calculate_fire_danger_with_live_moisture(
        weather,
        live_fuel_moisture.unwrap_or(DEFAULT_LIVE_FUEL_MOISTURE),
    )
}

/// The shared standard grass engine
pub fn default_engine() -> &'static NfdrsEngine {
    &DEFAULT_ENGINE
}
