//! C ABI for the NFDRS fire danger engine
//!
//! The boundary is the only place inputs are checked: pointers must be
//! non-null and every number must be finite. Finite but physically
//! implausible values pass straight through to the engine, which clamps.

mod error;
mod helpers;

pub use error::{nfdrs_get_last_error, nfdrs_get_last_error_code, NfdrsErrorCode};

use error::DefaultFfiError;
use helpers::{clear_last_error, track_error, track_result};
use nfdrs_core::core_types::{Langleys, Percent};
use nfdrs_core::{
    default_engine, FireDangerClass, FireDangerResult, WeatherObservation,
    DEFAULT_LIVE_FUEL_MOISTURE,
};
use std::os::raw::c_char;

/// C-compatible weather observation
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NfdrsWeather {
    /// Air temperature (°F)
    pub temperature: f64,
    /// Relative humidity (%)
    pub relative_humidity: f64,
    /// Wind speed (mph)
    pub wind_speed: f64,
    /// 24-hour precipitation (inches), 0 when unknown
    pub precipitation: f64,
    /// Solar radiation (langleys), read only when `has_solar_radiation` is set
    pub solar_radiation: f64,
    pub has_solar_radiation: bool,
}

/// C-compatible fire danger class
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NfdrsFireDangerClass {
    Low = 0,
    Moderate = 1,
    High = 2,
    VeryHigh = 3,
    Extreme = 4,
}

impl From<FireDangerClass> for NfdrsFireDangerClass {
    fn from(class: FireDangerClass) -> Self {
        match class {
            FireDangerClass::Low => NfdrsFireDangerClass::Low,
            FireDangerClass::Moderate => NfdrsFireDangerClass::Moderate,
            FireDangerClass::High => NfdrsFireDangerClass::High,
            FireDangerClass::VeryHigh => NfdrsFireDangerClass::VeryHigh,
            FireDangerClass::Extreme => NfdrsFireDangerClass::Extreme,
        }
    }
}

/// C-compatible fire danger result
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NfdrsResult {
    pub dead_fuel_moisture: f64,
    pub live_fuel_moisture: f64,
    pub spread_component: f64,
    pub energy_release_component: f64,
    pub burning_index: f64,
    pub fire_danger_class: NfdrsFireDangerClass,
}

impl From<FireDangerResult> for NfdrsResult {
    fn from(result: FireDangerResult) -> Self {
        NfdrsResult {
            dead_fuel_moisture: *result.dead_fuel_moisture(),
            live_fuel_moisture: *result.live_fuel_moisture(),
            spread_component: result.spread_component(),
            energy_release_component: result.energy_release_component(),
            burning_index: result.burning_index(),
            fire_danger_class: result.fire_danger_class().into(),
        }
    }
}

fn require_finite(param_name: &str, value: f64) -> Result<f64, DefaultFfiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DefaultFfiError::non_finite(param_name, value))
    }
}

fn observation_from(weather: &NfdrsWeather) -> Result<WeatherObservation, DefaultFfiError> {
    let observation = WeatherObservation::from_raw(
        require_finite("temperature", weather.temperature)?,
        require_finite("relative_humidity", weather.relative_humidity)?,
        require_finite("wind_speed", weather.wind_speed)?,
        require_finite("precipitation", weather.precipitation)?,
    );

    if weather.has_solar_radiation {
        let radiation = require_finite("solar_radiation", weather.solar_radiation)?;
        Ok(observation.with_solar_radiation(Langleys::new(radiation)))
    } else {
        Ok(observation)
    }
}

/// Calculate fire danger assuming fully turgid live fuel (120%)
///
/// # Returns
/// - `Ok` with `out_result` filled in on success
/// - `NullPointer` if `weather` or `out_result` is null
/// - `InvalidParameter` if any weather value is NaN or infinite
///
/// # Safety
/// `weather` must point to a valid `NfdrsWeather` and `out_result` to writable
/// memory for one `NfdrsResult`.
#[no_mangle]
pub unsafe extern "C" fn nfdrs_calculate_fire_danger(
    weather: *const NfdrsWeather,
    out_result: *mut NfdrsResult,
) -> NfdrsErrorCode {
    unsafe {
        nfdrs_calculate_fire_danger_with_live_moisture(
            weather,
            *DEFAULT_LIVE_FUEL_MOISTURE,
            out_result,
        )
    }
}

/// Calculate fire danger with a caller-supplied live fuel moisture (%)
///
/// # Returns
/// - `Ok` with `out_result` filled in on success
/// - `NullPointer` if `weather` or `out_result` is null
/// - `InvalidParameter` if `live_fuel_moisture` or any weather value is NaN or infinite
///
/// `out_result` is left untouched on error.
///
/// # Safety
/// `weather` must point to a valid `NfdrsWeather` and `out_result` to writable
/// memory for one `NfdrsResult`.
#[no_mangle]
pub unsafe extern "C" fn nfdrs_calculate_fire_danger_with_live_moisture(
    weather: *const NfdrsWeather,
    live_fuel_moisture: f64,
    out_result: *mut NfdrsResult,
) -> NfdrsErrorCode {
    if out_result.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_result"));
    }

    let Some(weather) = (unsafe { weather.as_ref() }) else {
        return track_error(&DefaultFfiError::null_pointer("weather"));
    };

    let observation = match track_result(observation_from(weather)) {
        Ok(observation) => observation,
        Err(code) => return code,
    };
    let live_fuel_moisture =
        match track_result(require_finite("live_fuel_moisture", live_fuel_moisture)) {
            Ok(value) => Percent::new(value),
            Err(code) => return code,
        };

    let result = default_engine()
        .calculate_fire_danger_with_live_moisture(&observation, live_fuel_moisture);

    unsafe {
        *out_result = result.into();
    }
    clear_last_error();
    NfdrsErrorCode::Ok
}

/// Name of a fire danger class ("LOW" ... "EXTREME")
///
/// The returned string is static. **DO NOT FREE THIS POINTER**.
#[no_mangle]
pub extern "C" fn nfdrs_fire_danger_class_name(class: NfdrsFireDangerClass) -> *const c_char {
    let name = match class {
        NfdrsFireDangerClass::Low => c"LOW",
        NfdrsFireDangerClass::Moderate => c"MODERATE",
        NfdrsFireDangerClass::High => c"HIGH",
        NfdrsFireDangerClass::VeryHigh => c"VERY HIGH",
        NfdrsFireDangerClass::Extreme => c"EXTREME",
    };
    name.as_ptr()
}

/// Live fuel moisture assumed by `nfdrs_calculate_fire_danger` (%)
#[no_mangle]
pub extern "C" fn nfdrs_default_live_fuel_moisture() -> f64 {
    *DEFAULT_LIVE_FUEL_MOISTURE
}
