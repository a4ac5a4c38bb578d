//! Semantic unit types for fire weather quantities
//!
//! Station data arrives in a mix of US customary and metric units. These
//! newtype wrappers keep the engine inputs in the units its formulas expect
//! (°F, mph, inches, percent) and make every conversion explicit.
//!
//! # Design Philosophy
//! - All quantities are `f64`; the engine reproduces reference numbers exactly
//! - No constructor validates its input: the engine is total over the reals
//!   and clamps its outputs instead
//! - Total ordering via `Ord` (`f64::total_cmp`, NaN sorts above everything)
//! - Serde support, serialized transparently as the bare number
//!
//! # Usage
//! ```
//! use nfdrs_core::core_types::units::{Celsius, Fahrenheit, KilometersPerHour, MilesPerHour};
//!
//! let temp: Fahrenheit = Celsius::new(35.0).into();
//! assert!((*temp - 95.0).abs() < 1e-9);
//!
//! let wind: MilesPerHour = KilometersPerHour::new(100.0).into();
//! assert!((*wind - 62.1371).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Fahrenheit(f64);

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fahrenheit {
    /// Water freezing point
    pub const FREEZING: Fahrenheit = Fahrenheit(32.0);

    /// Create a new Fahrenheit temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fahrenheit(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius((self.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<f64> for Fahrenheit {
    fn from(v: f64) -> Self {
        Fahrenheit(v)
    }
}

impl From<Fahrenheit> for f64 {
    fn from(t: Fahrenheit) -> f64 {
        t.0
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Fahrenheit {
        c.to_fahrenheit()
    }
}

impl Sub for Fahrenheit {
    type Output = f64;
    fn sub(self, rhs: Fahrenheit) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.0)
    }
}

/// Temperature in degrees Celsius, as reported by Weather.gov stations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to Fahrenheit (°F = °C × 9/5 + 32)
    #[inline]
    #[must_use]
    pub fn to_fahrenheit(self) -> Fahrenheit {
        Fahrenheit(self.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius(v)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Celsius {
        f.to_celsius()
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

// ============================================================================
// SPEED
// ============================================================================

/// Wind speed in miles per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MilesPerHour(f64);

impl Eq for MilesPerHour {}

impl PartialOrd for MilesPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MilesPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MilesPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MilesPerHour {
    /// Calm air
    pub const CALM: MilesPerHour = MilesPerHour(0.0);

    /// Create a new speed in mph
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MilesPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for MilesPerHour {
    fn from(v: f64) -> Self {
        MilesPerHour(v)
    }
}

impl From<MilesPerHour> for f64 {
    fn from(s: MilesPerHour) -> f64 {
        s.0
    }
}

impl From<KilometersPerHour> for MilesPerHour {
    fn from(k: KilometersPerHour) -> MilesPerHour {
        k.to_mph()
    }
}

impl fmt::Display for MilesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mph", self.0)
    }
}

/// Wind speed in kilometres per hour, as reported by Weather.gov stations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerHour {
    /// Miles per kilometre
    const MPH_PER_KMH: f64 = 0.621371;

    /// Create a new speed in km/h
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to miles per hour
    #[inline]
    #[must_use]
    pub fn to_mph(self) -> MilesPerHour {
        MilesPerHour(self.0 * Self::MPH_PER_KMH)
    }
}

impl From<f64> for KilometersPerHour {
    fn from(v: f64) -> Self {
        KilometersPerHour(v)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

// ============================================================================
// PRECIPITATION & RADIATION
// ============================================================================

/// Precipitation depth in inches
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Inches(f64);

impl Eq for Inches {}

impl PartialOrd for Inches {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Inches {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Inches {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Inches {
    /// No precipitation
    pub const ZERO: Inches = Inches(0.0);

    /// Create a new depth in inches
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Inches(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Inches {
    fn from(v: f64) -> Self {
        Inches(v)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} in", self.0)
    }
}

/// Solar radiation in langleys (cal/cm²)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Langleys(f64);

impl Deref for Langleys {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Langleys {
    /// Create a new radiation value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Langleys(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Langleys {
    fn from(v: f64) -> Self {
        Langleys(v)
    }
}

impl fmt::Display for Langleys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ly", self.0)
    }
}

// ============================================================================
// DIMENSIONLESS
// ============================================================================

/// A percentage (nominally 0-100, fuel moisture may exceed 100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Percent {
    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to fraction (percent / 100)
    #[inline]
    #[must_use]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(v: f64) -> Self {
        Percent(v)
    }
}

impl From<Percent> for f64 {
    fn from(p: Percent) -> f64 {
        p.0
    }
}

impl Add for Percent {
    type Output = Percent;
    fn add(self, rhs: Percent) -> Percent {
        Percent(self.0 + rhs.0)
    }
}

impl Sub for Percent {
    type Output = Percent;
    fn sub(self, rhs: Percent) -> Percent {
        Percent(self.0 - rhs.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_celsius_fahrenheit_conversion() {
        assert_relative_eq!(*Celsius::new(0.0).to_fahrenheit(), 32.0);
        assert_relative_eq!(*Celsius::new(100.0).to_fahrenheit(), 212.0);
        assert_relative_eq!(*Fahrenheit::new(-40.0).to_celsius(), -40.0);
    }

    #[test]
    fn test_kmh_to_mph() {
        let mph: MilesPerHour = KilometersPerHour::new(10.0).into();
        assert_relative_eq!(*mph, 6.21371, epsilon = 1e-12);
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let nan = Percent::new(f64::NAN);
        let hundred = Percent::new(100.0);
        assert!(hundred.max(nan).is_nan(), "NaN sorts above every value");
        assert!(Percent::new(5.0) < hundred);
    }

    #[test]
    fn test_fahrenheit_difference_is_raw_degrees() {
        assert_relative_eq!(Fahrenheit::new(95.0) - Fahrenheit::new(70.0), 25.0);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Percent::new(12.345).to_string(), "12.3%");
        assert_eq!(Fahrenheit::new(95.0).to_string(), "95.0°F");
        assert_eq!(MilesPerHour::new(30.0).to_string(), "30.0 mph");
        assert_eq!(Inches::new(0.5).to_string(), "0.50 in");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Percent::new(42.5)).unwrap();
        assert_eq!(json, "42.5");
        let back: MilesPerHour = serde_json::from_str("12.0").unwrap();
        assert_eq!(back, MilesPerHour::new(12.0));
    }
}
