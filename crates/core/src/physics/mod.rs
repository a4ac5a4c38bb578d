//! NFDRS calculation steps
//!
//! Each step is a pure function that ends in an unconditional clamp, so the
//! pipeline is total over its numeric domain. The engine runs them in order:
//! dead fuel moisture → spread component → energy release component →
//! burning index.

pub mod burning_index;
pub mod energy_release;
pub mod fuel_moisture;
pub mod spread_component;

pub use burning_index::{calculate_burning_index, BURNING_INDEX_MAX};
pub use energy_release::{calculate_energy_release_component, ENERGY_RELEASE_COMPONENT_MAX};
pub use fuel_moisture::{
    calculate_dead_fuel_moisture, equilibrium_moisture_content, temperature_factor,
    DEAD_FUEL_MOISTURE_MAX, DEAD_FUEL_MOISTURE_MIN,
};
pub use spread_component::{calculate_spread_component, SPREAD_COMPONENT_MAX};

/// Clamp an index to `[min, max]`, sending NaN to `min`
///
/// `f64::clamp` propagates NaN; a NaN here (e.g. `inf × 0` or a negative
/// wind speed raised to 1.5) must still land inside the output range.
#[inline]
pub(crate) fn clamp_index(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_index;

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(5.0, 1.0, 35.0), 5.0);
        assert_eq!(clamp_index(-5.0, 1.0, 35.0), 1.0);
        assert_eq!(clamp_index(f64::INFINITY, 1.0, 35.0), 35.0);
        assert_eq!(clamp_index(f64::NAN, 1.0, 35.0), 1.0);
    }
}
