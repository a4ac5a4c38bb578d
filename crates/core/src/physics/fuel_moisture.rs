//! Dead fuel moisture from a daily weather observation
//!
//! Simplified NFDRS 1-hour fuel moisture:
//! 1. A three-branch piecewise linear Equilibrium Moisture Content (EMC) in
//!    relative humidity
//! 2. A linear temperature correction around a 70°F baseline
//! 3. A wetting adjustment when 24-hour precipitation exceeds 0.1 inch
//!
//! The result is clamped to 1-35%.

use super::clamp_index;
use crate::core_types::units::{Fahrenheit, Percent};
use crate::core_types::weather::WeatherObservation;

/// Lower clamp for dead fuel moisture (%)
pub const DEAD_FUEL_MOISTURE_MIN: f64 = 1.0;

/// Upper clamp for dead fuel moisture (%)
pub const DEAD_FUEL_MOISTURE_MAX: f64 = 35.0;

/// Temperature at which the temperature factor is exactly 1 (°F)
const BASELINE_TEMPERATURE: f64 = 70.0;

/// Fractional change in moisture per °F away from the baseline
const TEMPERATURE_COEFFICIENT: f64 = 0.0154;

/// Precipitation above this depth wets the fuel (inches)
const WETTING_THRESHOLD: f64 = 0.1;

/// Moisture percentage points added per inch of wetting rain
const WETTING_RATE: f64 = 2.0;

/// Equilibrium moisture content for a relative humidity
///
/// Piecewise linear in humidity, with strict less-than breakpoints:
///
/// ```text
/// rh < 10        EMC = 0.03 × rh
/// 10 <= rh < 50  EMC = 2.22 × rh/100 − 0.16
/// rh >= 50       EMC = 21.06 × rh/100 − 7.39
/// ```
///
/// The piecewise curve is not continuous at the breakpoints and the value is
/// not clamped here.
///
/// # Example
/// ```
/// use nfdrs_core::core_types::Percent;
/// use nfdrs_core::physics::equilibrium_moisture_content;
///
/// // Exactly 10% humidity falls in the middle branch
/// let emc = equilibrium_moisture_content(Percent::new(10.0));
/// assert!((emc - 0.062).abs() < 1e-12);
/// ```
pub fn equilibrium_moisture_content(relative_humidity: Percent) -> f64 {
    let rh = *relative_humidity;

    if rh < 10.0 {
        0.03 * rh
    } else if rh < 50.0 {
        2.22 * (rh / 100.0) - 0.16
    } else {
        21.06 * (rh / 100.0) - 7.39
    }
}

/// Linear temperature correction applied to EMC
///
/// `1 + 0.0154 × (T − 70)`, so 1.0 at 70°F.
pub fn temperature_factor(temperature: Fahrenheit) -> f64 {
    1.0 + TEMPERATURE_COEFFICIENT * (*temperature - BASELINE_TEMPERATURE)
}

/// Calculate 1-hour dead fuel moisture content
///
/// # Returns
/// Dead fuel moisture (%), clamped to 1-35
pub fn calculate_dead_fuel_moisture(weather: &WeatherObservation) -> Percent {
    let emc = equilibrium_moisture_content(weather.relative_humidity());
    let mut dead_fm = emc * temperature_factor(weather.temperature());

    let precipitation = *weather.precipitation();
    if precipitation > WETTING_THRESHOLD {
        dead_fm += precipitation * WETTING_RATE;
    }

    Percent::new(clamp_index(
        dead_fm,
        DEAD_FUEL_MOISTURE_MIN,
        DEAD_FUEL_MOISTURE_MAX,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn observation(temperature: f64, humidity: f64, precipitation: f64) -> WeatherObservation {
        WeatherObservation::from_raw(temperature, humidity, 10.0, precipitation)
    }

    #[test]
    fn test_emc_branches() {
        assert_relative_eq!(
            equilibrium_moisture_content(Percent::new(5.0)),
            0.15,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            equilibrium_moisture_content(Percent::new(30.0)),
            2.22 * 0.3 - 0.16
        );
        assert_relative_eq!(
            equilibrium_moisture_content(Percent::new(80.0)),
            21.06 * 0.8 - 7.39
        );
    }

    #[test]
    fn test_emc_breakpoints_use_upper_branch() {
        // rh = 10 must not use 0.03 × rh = 0.3
        assert_relative_eq!(
            equilibrium_moisture_content(Percent::new(10.0)),
            0.062,
            epsilon = 1e-12
        );
        // rh = 50 must not use the middle branch (0.95)
        assert_relative_eq!(
            equilibrium_moisture_content(Percent::new(50.0)),
            3.14,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_emc_monotonic_within_branches() {
        // Humidity in tenths of a percent, one range per branch
        let branches = [(0, 99), (100, 499), (500, 1000)];

        for (start, end) in branches {
            let mut previous = f64::NEG_INFINITY;
            for tenths in start..=end {
                let rh = f64::from(tenths) / 10.0;
                let emc = equilibrium_moisture_content(Percent::new(rh));
                assert!(
                    emc >= previous,
                    "EMC decreased within branch at rh={rh}: {emc} < {previous}"
                );
                previous = emc;
            }
        }
    }

    #[test]
    fn test_temperature_factor() {
        assert_relative_eq!(temperature_factor(Fahrenheit::new(70.0)), 1.0);
        assert_relative_eq!(
            temperature_factor(Fahrenheit::new(95.0)),
            1.385,
            epsilon = 1e-12
        );

        let mut previous = temperature_factor(Fahrenheit::new(-40.0));
        for t in -39..=130 {
            let factor = temperature_factor(Fahrenheit::new(f64::from(t)));
            assert!(factor > previous, "Temperature factor must rise with temperature");
            previous = factor;
        }
    }

    #[test]
    fn test_humid_observation_value() {
        // EMC = 21.06 × 0.9 − 7.39 = 11.564, factor at 70°F = 1
        let dead_fm = calculate_dead_fuel_moisture(&observation(70.0, 90.0, 0.0));
        assert_relative_eq!(*dead_fm, 11.564, epsilon = 1e-9);
    }

    #[test]
    fn test_dry_observation_clamps_to_minimum() {
        let dead_fm = calculate_dead_fuel_moisture(&observation(95.0, 15.0, 0.0));
        assert_eq!(*dead_fm, DEAD_FUEL_MOISTURE_MIN);
    }

    #[test]
    fn test_wetting_threshold() {
        let base = calculate_dead_fuel_moisture(&observation(70.0, 90.0, 0.0));
        let light = calculate_dead_fuel_moisture(&observation(70.0, 90.0, 0.05));
        let at_threshold = calculate_dead_fuel_moisture(&observation(70.0, 90.0, 0.1));
        let soaking = calculate_dead_fuel_moisture(&observation(70.0, 90.0, 0.5));

        assert_eq!(light, base, "Light rain below threshold has no effect");
        assert_eq!(at_threshold, base, "Threshold itself is exclusive");
        assert_relative_eq!(*soaking, *base + 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wetting_never_lowers_moisture() {
        for humidity in [0.0, 9.0, 10.0, 35.0, 50.0, 75.0, 100.0] {
            for temperature in [20.0, 70.0, 110.0] {
                let dry = calculate_dead_fuel_moisture(&observation(temperature, humidity, 0.05));
                let wet = calculate_dead_fuel_moisture(&observation(temperature, humidity, 0.5));
                assert!(wet >= dry, "Wetting lowered moisture at T={temperature}, RH={humidity}");
            }
        }
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        let cases = [
            observation(-500.0, 150.0, 0.0),
            observation(500.0, 150.0, 0.0),
            observation(500.0, -20.0, 0.0),
            observation(70.0, 100.0, 50.0),
            observation(f64::INFINITY, 0.0, 0.0),
            observation(f64::MAX, f64::MAX, f64::MAX),
        ];

        for obs in cases {
            let dead_fm = *calculate_dead_fuel_moisture(&obs);
            assert!(
                (DEAD_FUEL_MOISTURE_MIN..=DEAD_FUEL_MOISTURE_MAX).contains(&dead_fm),
                "Dead fuel moisture {dead_fm} out of range for {obs:?}"
            );
        }
    }
}
