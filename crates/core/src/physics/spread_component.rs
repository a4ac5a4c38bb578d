//! Spread Component (SC)
//!
//! Index proportional to the potential forward rate of spread. Wind drives
//! spread with a 1.5 power law and dead fuel moisture damps it
//! exponentially.

use super::clamp_index;
use crate::core_types::units::{MilesPerHour, Percent};

/// Upper clamp for the spread component
pub const SPREAD_COMPONENT_MAX: f64 = 99.0;

/// Moisture damping rate per percentage point of dead fuel moisture
const MOISTURE_DAMPING: f64 = 0.108;

/// Rate of spread to spread component conversion
const SPREAD_COMPONENT_SCALE: f64 = 0.560;

/// Calculate the spread component
///
/// # Formula
/// ```text
/// wind_factor = V^1.5 / 5
/// fm_factor   = exp(−0.108 × FM_dead)
/// SC          = 0.560 × wind_factor × fm_factor
/// ```
///
/// A negative wind speed has no real 1.5 power; the resulting NaN is clamped
/// to 0 like any other out-of-range value.
///
/// # Returns
/// Spread component, clamped to 0-99
pub fn calculate_spread_component(wind_speed: MilesPerHour, dead_fuel_moisture: Percent) -> f64 {
    let wind_factor = wind_speed.powf(1.5) / 5.0;
    let fm_factor = (-MOISTURE_DAMPING * *dead_fuel_moisture).exp();

    let spread_rate = wind_factor * fm_factor;
    let spread_component = SPREAD_COMPONENT_SCALE * spread_rate;

    clamp_index(spread_component, 0.0, SPREAD_COMPONENT_MAX)
}
