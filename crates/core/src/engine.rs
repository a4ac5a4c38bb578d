//! NFDRS fire danger engine
//!
//! Runs the calculation steps in [`crate::physics`] in strict order and
//! classifies the resulting burning index. The engine holds only its fuel
//! model, so a single instance can be shared freely across threads.

use crate::core_types::fire_danger::{FireDangerClass, FireDangerResult};
use crate::core_types::fuel::FuelModel;
use crate::core_types::units::Percent;
use crate::core_types::weather::WeatherObservation;
use crate::physics::{
    calculate_burning_index, calculate_dead_fuel_moisture, calculate_energy_release_component,
    calculate_spread_component,
};
use rayon::prelude::*;
use tracing::{debug, info};

/// Live fuel moisture assumed when the caller does not supply one (%)
///
/// Fully turgid live vegetation.
pub const DEFAULT_LIVE_FUEL_MOISTURE: Percent = Percent::new(120.0);

/// Core NFDRS calculation engine
///
/// # Example
/// ```
/// use nfdrs_core::{FireDangerClass, NfdrsEngine, WeatherObservation};
///
/// let engine = NfdrsEngine::default();
///
/// // Hot, dry and windy
/// let weather = WeatherObservation::from_raw(95.0, 15.0, 30.0, 0.0);
/// let result = engine.calculate_fire_danger(&weather);
///
/// assert!(result.fire_danger_class() >= FireDangerClass::High);
/// assert_eq!(*result.live_fuel_moisture(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NfdrsEngine {
    fuel_model: FuelModel,
}

impl NfdrsEngine {
    /// Create an engine for a fuel model
    ///
    /// The formulas do not vary by fuel model yet; the model is recorded so
    /// results can be attributed to it.
    pub const fn new(fuel_model: FuelModel) -> Self {
        NfdrsEngine { fuel_model }
    }

    pub fn fuel_model(&self) -> FuelModel {
        self.fuel_model
    }

    /// Fire danger for an observation, assuming fully turgid live fuel (120%)
    pub fn calculate_fire_danger(&self, weather: &WeatherObservation) -> FireDangerResult {
        self.calculate_fire_danger_with_live_moisture(weather, DEFAULT_LIVE_FUEL_MOISTURE)
    }

    /// Fire danger for an observation with a caller-supplied live fuel moisture
    ///
    /// Never fails. Implausible inputs (negative wind, humidity above 100%,
    /// ...) are not rejected; each step clamps its output instead.
    pub fn calculate_fire_danger_with_live_moisture(
        &self,
        weather: &WeatherObservation,
        live_fuel_moisture: Percent,
    ) -> FireDangerResult {
        let dead_fm = calculate_dead_fuel_moisture(weather);
        let spread_component = calculate_spread_component(weather.wind_speed(), dead_fm);
        let erc = calculate_energy_release_component(dead_fm, live_fuel_moisture);
        let burning_index = calculate_burning_index(spread_component, erc);

        let result =
            FireDangerResult::new(dead_fm, live_fuel_moisture, spread_component, erc, burning_index);

        debug!(
            fuel_model = %self.fuel_model,
            temperature = *weather.temperature(),
            relative_humidity = *weather.relative_humidity(),
            wind_speed = *weather.wind_speed(),
            precipitation = *weather.precipitation(),
            dead_fuel_moisture = *dead_fm,
            spread_component,
            erc,
            burning_index,
            class = %result.fire_danger_class(),
            "Calculated fire danger"
        );

        result
    }

    /// Fire danger for many observations at the default live fuel moisture
    ///
    /// Evaluated in parallel; results are returned in input order.
    pub fn calculate_batch(&self, observations: &[WeatherObservation]) -> Vec<FireDangerResult> {
        let results: Vec<FireDangerResult> = observations
            .par_iter()
            .map(|weather| self.calculate_fire_danger(weather))
            .collect();

        log_batch_summary(&results);
        results
    }

    /// Fire danger for many observations, each with its own live fuel moisture
    ///
    /// Evaluated in parallel; results are returned in input order.
    pub fn calculate_batch_with_live_moisture(
        &self,
        inputs: &[(WeatherObservation, Percent)],
    ) -> Vec<FireDangerResult> {
        let results: Vec<FireDangerResult> = inputs
            .par_iter()
            .map(|(weather, live_fm)| self.calculate_fire_danger_with_live_moisture(weather, *live_fm))
            .collect();

        log_batch_summary(&results);
        results
    }
}

fn log_batch_summary(results: &[FireDangerResult]) {
    let peak = results
        .iter()
        .map(FireDangerResult::fire_danger_class)
        .max()
        .unwrap_or(FireDangerClass::Low);
    let elevated = results
        .iter()
        .filter(|r| r.fire_danger_class() >= FireDangerClass::VeryHigh)
        .count();

    info!(
        observations = results.len(),
        elevated,
        peak_class = %peak,
        "Calculated fire danger batch"
    );
}
