//! Rendering canonical observations as records

use std::fmt;

use crate::app::models::{DistanceUnit, Observation, TemperatureUnit};
use crate::app::services::unit_converter::{distance_from_meters, temperature_from_kelvin};
use crate::constants::{COORDINATE_SEPARATOR, FIELD_SEPARATOR, TIMESTAMP_FORMAT};
use crate::Result;

/// Encode an observation as `TIMESTAMP|X,Y|TEMP|STATION`
///
/// A missing unit falls back to the station's native unit for that field,
/// which is Kelvin and kilometers for stations without an explicit entry.
pub fn encode_observation(
    observation: &Observation,
    distance_unit: Option<DistanceUnit>,
    temperature_unit: Option<TemperatureUnit>,
) -> String {
    let (native_temperature, native_distance) = observation.station.native_units();
    let distance_unit = distance_unit.unwrap_or(native_distance);
    let temperature_unit = temperature_unit.unwrap_or(native_temperature);

    format!(
        "{}{sep}{}{coord}{}{sep}{}{sep}{}",
        observation.timestamp.format(TIMESTAMP_FORMAT),
        distance_from_meters(observation.location.x, distance_unit),
        distance_from_meters(observation.location.y, distance_unit),
        temperature_from_kelvin(observation.temperature, temperature_unit),
        observation.station.code(),
        sep = FIELD_SEPARATOR,
        coord = COORDINATE_SEPARATOR,
    )
}

/// Encode an observation in its station's native units
pub fn encode_native(observation: &Observation) -> String {
    encode_observation(observation, None, None)
}

/// Encode with units given by name
///
/// Fails with [`Error::UnsupportedUnit`](crate::Error::UnsupportedUnit) when a
/// supplied name is not recognised. Such a failure is a caller mistake and is
/// never a record error.
pub fn encode_with_unit_names(
    observation: &Observation,
    distance_unit: Option<&str>,
    temperature_unit: Option<&str>,
) -> Result<String> {
    let distance_unit = distance_unit.map(str::parse::<DistanceUnit>).transpose()?;
    let temperature_unit = temperature_unit
        .map(str::parse::<TemperatureUnit>)
        .transpose()?;
    Ok(encode_observation(observation, distance_unit, temperature_unit))
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_native(self))
    }
}
