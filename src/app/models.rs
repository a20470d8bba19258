//! Data models for balloon observation processing
//!
//! This module contains the core data structures for representing relay stations,
//! measurement units and canonical observation records.

use crate::{Error, Result};
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Station Codes
// =============================================================================

/// Relay station identified by a two-letter ISO 3166 country code
///
/// The set is closed: any other code in a record is invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Station {
    #[serde(rename = "AR")]
    Ar,
    #[serde(rename = "AU")]
    Au,
    #[serde(rename = "BR")]
    Br,
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "DE")]
    De,
    #[serde(rename = "FR")]
    Fr,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "MX")]
    Mx,
    #[serde(rename = "NZ")]
    Nz,
    #[serde(rename = "US")]
    Us,
}

impl Station {
    /// All known stations in declaration order
    pub const ALL: [Station; 10] = [
        Station::Ar,
        Station::Au,
        Station::Br,
        Station::Ca,
        Station::De,
        Station::Fr,
        Station::It,
        Station::Mx,
        Station::Nz,
        Station::Us,
    ];

    /// Two-letter code as it appears in records
    pub fn code(self) -> &'static str {
        match self {
            Station::Ar => "AR",
            Station::Au => "AU",
            Station::Br => "BR",
            Station::Ca => "CA",
            Station::De => "DE",
            Station::Fr => "FR",
            Station::It => "IT",
            Station::Mx => "MX",
            Station::Nz => "NZ",
            Station::Us => "US",
        }
    }

    /// Look up a station by its exact two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|station| station.code() == code)
    }

    /// Units the station reports in: (temperature, distance)
    ///
    /// Stations without an explicit entry report Kelvin and kilometers.
    pub fn native_units(self) -> (TemperatureUnit, DistanceUnit) {
        match self {
            Station::Au => (TemperatureUnit::Celsius, DistanceUnit::Kilometers),
            Station::Us => (TemperatureUnit::Fahrenheit, DistanceUnit::Miles),
            Station::Fr => (TemperatureUnit::Kelvin, DistanceUnit::Meters),
            _ => (TemperatureUnit::Kelvin, DistanceUnit::Kilometers),
        }
    }

    /// Native temperature unit
    pub fn temperature_unit(self) -> TemperatureUnit {
        self.native_units().0
    }

    /// Native distance unit
    pub fn distance_unit(self) -> DistanceUnit {
        self.native_units().1
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/alignment flags working for report columns
        f.pad(self.code())
    }
}

// =============================================================================
// Measurement Units
// =============================================================================

/// Temperature units accepted on input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Recognised unit names
    pub const NAMES: [&'static str; 3] = ["kelvin", "celsius", "fahrenheit"];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Short symbol used in validation messages
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "°K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Whether readings in this unit may carry a sign
    pub fn is_signed(self) -> bool {
        !matches!(self, TemperatureUnit::Kelvin)
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kelvin" => Ok(TemperatureUnit::Kelvin),
            "celsius" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(Error::unsupported_unit("temperature", other)),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance units accepted on input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Recognised unit names
    pub const NAMES: [&'static str; 3] = ["meters", "kilometers", "miles"];

    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "meters",
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "meters" => Ok(DistanceUnit::Meters),
            "kilometers" => Ok(DistanceUnit::Kilometers),
            "miles" => Ok(DistanceUnit::Miles),
            other => Err(Error::unsupported_unit("distance", other)),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Observation Record Structure
// =============================================================================

/// Balloon position in meters on the station grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: u64,
    pub y: u64,
}

impl Location {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another location in meters
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Observation in canonical units
///
/// Temperature is always Kelvin and location always meters; conversion to
/// other units happens only when the observation is decoded or encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// UTC instant at minute resolution
    pub timestamp: DateTime<Utc>,

    /// Position in meters
    pub location: Location,

    /// Temperature in Kelvin
    pub temperature: i64,

    /// Relaying station
    pub station: Station,
}

impl Observation {
    /// Create a canonical observation, dropping any sub-minute precision
    pub fn new(
        timestamp: DateTime<Utc>,
        location: Location,
        temperature: i64,
        station: Station,
    ) -> Self {
        Self {
            timestamp: truncate_to_minute(timestamp),
            location,
            temperature,
            station,
        }
    }
}

/// Drop seconds and sub-second precision from a timestamp
pub fn truncate_to_minute(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_station_codes_round_trip() {
        for station in Station::ALL {
            assert_eq!(Station::from_code(station.code()), Some(station));
        }
        assert_eq!(Station::from_code("GB"), None);
        assert_eq!(Station::from_code("au"), None);
        assert_eq!(Station::from_code(""), None);
    }

    #[test]
    fn test_station_order_is_alphabetical() {
        let mut sorted = Station::ALL;
        sorted.sort_by_key(|s| s.code());
        assert_eq!(sorted, Station::ALL);
    }

    #[test]
    fn test_native_units() {
        assert_eq!(
            Station::Au.native_units(),
            (TemperatureUnit::Celsius, DistanceUnit::Kilometers)
        );
        assert_eq!(
            Station::Us.native_units(),
            (TemperatureUnit::Fahrenheit, DistanceUnit::Miles)
        );
        assert_eq!(
            Station::Fr.native_units(),
            (TemperatureUnit::Kelvin, DistanceUnit::Meters)
        );
        for station in [Station::Ar, Station::Br, Station::De, Station::Nz] {
            assert_eq!(
                station.native_units(),
                (TemperatureUnit::Kelvin, DistanceUnit::Kilometers)
            );
        }
    }

    #[test]
    fn test_unit_names_parse() {
        for name in TemperatureUnit::NAMES {
            assert_eq!(name.parse::<TemperatureUnit>().unwrap().name(), name);
        }
        for name in DistanceUnit::NAMES {
            assert_eq!(name.parse::<DistanceUnit>().unwrap().name(), name);
        }

        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedUnit { kind: "temperature", .. }
        ));
        let err = "Meters".parse::<DistanceUnit>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedUnit { kind: "distance", .. }));
    }

    #[test]
    fn test_location_distance() {
        let origin = Location::new(0, 0);
        assert_eq!(origin.distance_to(&Location::new(3000, 4000)), 5000.0);
        assert_eq!(Location::new(3000, 4000).distance_to(&origin), 5000.0);
        assert_eq!(origin.distance_to(&origin), 0.0);
    }

    #[test]
    fn test_observation_drops_seconds() {
        let timestamp = Utc.with_ymd_and_hms(2014, 12, 31, 13, 44, 59).unwrap();
        let obs = Observation::new(timestamp, Location::new(1, 2), 250, Station::Fr);

        assert_eq!(
            obs.timestamp,
            Utc.with_ymd_and_hms(2014, 12, 31, 13, 44, 0).unwrap()
        );
    }

    #[test]
    fn test_station_display_respects_width() {
        assert_eq!(format!("{:>6}", Station::Nz), "    NZ");
        assert_eq!(Station::Mx.to_string(), "MX");
    }
}
