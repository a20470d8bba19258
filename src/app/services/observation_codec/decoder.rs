//! Record decoding and validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! field count, timestamp, location, station code, temperature.

use chrono::NaiveDateTime;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::trace;

use crate::app::models::{Location, Observation, Station, TemperatureUnit};
use crate::app::services::unit_converter::{distance_to_meters, temperature_to_kelvin};
use crate::constants::{
    COORDINATE_SEPARATOR, FIELD_COUNT, FIELD_SEPARATOR, MIN_CELSIUS, MIN_FAHRENHEIT,
    TIMESTAMP_FORMAT, TIMESTAMP_LENGTH,
};
use crate::{Error, Result};

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}$").expect("valid timestamp pattern")
});

static UNSIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid unsigned integer pattern"));

static SIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid signed integer pattern"));

/// Decode a raw record into a canonical observation
///
/// The record must not carry a line terminator. On failure the returned
/// error is a record error (see [`Error::is_record_error`]) carrying the
/// reason and the offending text.
pub fn decode_observation(record: &str) -> Result<Observation> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(Error::malformed_record(
            format!(
                "Incorrect number of fields: {} instead of {}",
                fields.len(),
                FIELD_COUNT
            ),
            record,
        ));
    }

    let timestamp = parse_timestamp(fields[0], record)?;
    let (x, y) = parse_coordinates(fields[1], record)?;
    let station = Station::from_code(fields[3])
        .ok_or_else(|| Error::unknown_station(fields[3], record))?;
    let (temperature_unit, distance_unit) = station.native_units();
    let reading = parse_temperature(fields[2], temperature_unit, record)?;

    let location = match (
        distance_to_meters(x, distance_unit),
        distance_to_meters(y, distance_unit),
    ) {
        (Some(x), Some(y)) => Location::new(x, y),
        _ => {
            return Err(Error::malformed_record(
                format!("Location out of range: {}", fields[1]),
                record,
            ));
        }
    };

    let temperature = temperature_to_kelvin(reading, temperature_unit).ok_or_else(|| {
        Error::malformed_record(
            format!(
                "Incorrect temperature value ({}): {}",
                temperature_unit.symbol(),
                fields[2]
            ),
            record,
        )
    })?;

    let observation = Observation::new(timestamp.and_utc(), location, temperature, station);
    trace!("Decoded {:?}", observation);
    Ok(observation)
}

impl FromStr for Observation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_observation(s)
    }
}

/// Parse the `YYYY-MM-DDTHH:MM` timestamp field
///
/// Only the zero-padded digit layout is accepted, so that byte order of
/// records matches their chronological order.
fn parse_timestamp(field: &str, record: &str) -> Result<NaiveDateTime> {
    if field.chars().count() != TIMESTAMP_LENGTH {
        return Err(Error::malformed_record(
            format!("Incorrect timestamp string size: {}", field),
            record,
        ));
    }

    let malformed =
        || Error::malformed_record(format!("Incorrect timestamp format: {}", field), record);

    if !TIMESTAMP.is_match(field) {
        return Err(malformed());
    }
    NaiveDateTime::parse_from_str(field, TIMESTAMP_FORMAT).map_err(|_| malformed())
}

/// Parse the `X,Y` location field as two natural numbers
fn parse_coordinates(field: &str, record: &str) -> Result<(u64, u64)> {
    let malformed = || Error::malformed_record(format!("Incorrect location format: {}", field), record);

    let parts: Vec<&str> = field.split(COORDINATE_SEPARATOR).collect();
    if parts.len() != 2 || !parts.iter().all(|p| UNSIGNED_INTEGER.is_match(p)) {
        return Err(malformed());
    }

    let x = parts[0].parse::<u64>().map_err(|_| malformed())?;
    let y = parts[1].parse::<u64>().map_err(|_| malformed())?;
    Ok((x, y))
}

/// Parse the temperature field according to the station's native unit
///
/// Kelvin readings must be unsigned. Celsius and Fahrenheit readings may be
/// signed but not below absolute zero in their unit.
fn parse_temperature(field: &str, unit: TemperatureUnit, record: &str) -> Result<i64> {
    let malformed = || {
        Error::malformed_record(
            format!("Incorrect temperature value ({}): {}", unit.symbol(), field),
            record,
        )
    };

    let pattern = if unit.is_signed() {
        &SIGNED_INTEGER
    } else {
        &UNSIGNED_INTEGER
    };
    if !pattern.is_match(field) {
        return Err(malformed());
    }

    let value = field.parse::<i64>().map_err(|_| malformed())?;

    let minimum = match unit {
        TemperatureUnit::Celsius => Some(MIN_CELSIUS),
        TemperatureUnit::Fahrenheit => Some(MIN_FAHRENHEIT),
        TemperatureUnit::Kelvin => None,
    };
    if let Some(minimum) = minimum {
        if value < minimum {
            return Err(Error::out_of_range_temperature(value, unit, minimum, record));
        }
    }

    Ok(value)
}
