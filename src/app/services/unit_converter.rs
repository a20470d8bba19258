//! Temperature and distance conversions between canonical and reporting units
//!
//! Canonical units are Kelvin and meters. Conversions away from the canonical
//! units are lossy in fixed, documented ways:
//! - Kelvin to Celsius subtracts an integer offset
//! - Kelvin to Fahrenheit rounds up, Fahrenheit to Kelvin rounds down
//! - meters to kilometers/miles truncates
//!
//! Because of the ceil/floor pair a Fahrenheit round trip is not guaranteed
//! to return the starting value.

use crate::app::models::{DistanceUnit, TemperatureUnit};
use crate::constants::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE, KELVIN_CELSIUS_OFFSET, METERS_PER_KILOMETER,
    METERS_PER_MILE,
};

// =============================================================================
// Temperature
// =============================================================================

pub fn kelvin_to_celsius(kelvin: i64) -> i64 {
    kelvin - KELVIN_CELSIUS_OFFSET
}

/// `ceil(K * 1.8 - 459.67)`
pub fn kelvin_to_fahrenheit(kelvin: i64) -> i64 {
    ((kelvin as f64 * FAHRENHEIT_SCALE) - FAHRENHEIT_OFFSET).ceil() as i64
}

/// `None` when the reading is too large to hold in Kelvin
pub fn celsius_to_kelvin(celsius: i64) -> Option<i64> {
    celsius.checked_add(KELVIN_CELSIUS_OFFSET)
}

/// `floor((F + 459.67) * 5 / 9)`
pub fn fahrenheit_to_kelvin(fahrenheit: i64) -> i64 {
    ((fahrenheit as f64 + FAHRENHEIT_OFFSET) * 5.0 / 9.0).floor() as i64
}

/// Express a Kelvin temperature in `unit`
pub fn temperature_from_kelvin(kelvin: i64, unit: TemperatureUnit) -> i64 {
    match unit {
        TemperatureUnit::Kelvin => kelvin,
        TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
        TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
    }
}

/// Convert a temperature expressed in `unit` to Kelvin
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn temperature_to_kelvin(value: i64, unit: TemperatureUnit) -> Option<i64> {
    match unit {
        TemperatureUnit::Kelvin => Some(value),
        TemperatureUnit::Celsius => celsius_to_kelvin(value),
        TemperatureUnit::Fahrenheit => Some(fahrenheit_to_kelvin(value)),
    }
}

// =============================================================================
// Distance
// =============================================================================

fn meters_per_unit(unit: DistanceUnit) -> u64 {
    match unit {
        DistanceUnit::Meters => 1,
        DistanceUnit::Kilometers => METERS_PER_KILOMETER,
        DistanceUnit::Miles => METERS_PER_MILE,
    }
}

/// Express a distance in meters in `unit`, truncating
pub fn distance_from_meters(meters: u64, unit: DistanceUnit) -> u64 {
    meters / meters_per_unit(unit)
}

/// Convert a distance expressed in `unit` to meters
///
/// Returns `None` when the result does not fit in a `u64`.
pub fn distance_to_meters(value: u64, unit: DistanceUnit) -> Option<u64> {
    value.checked_mul(meters_per_unit(unit))
}
