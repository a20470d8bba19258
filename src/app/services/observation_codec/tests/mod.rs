//! Test utilities for the observation codec
//!
//! Shared fixtures used by the decoder and encoder test modules.

use chrono::{DateTime, TimeZone, Utc};

use crate::app::models::{Location, Observation, Station};


/// Timestamp shared by the literal fixtures
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 12, 31, 13, 44, 0).unwrap()
}

/// Celsius/kilometer record relayed by AU
pub const AU_RECORD: &str = "2014-12-31T13:44|10,5|243|AU";

/// Kelvin/meter record relayed by FR
pub const FR_RECORD: &str = "2014-12-31T13:44|10000,5000|516|FR";

/// Canonical observation both fixtures decode to (apart from the station)
pub fn canonical_observation(station: Station) -> Observation {
    Observation::new(fixture_timestamp(), Location::new(10_000, 5_000), 516, station)
}
