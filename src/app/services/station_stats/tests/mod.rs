//! Test utilities for station statistics
//!
//! Builds observations through the decoder so fixtures exercise the same
//! unit conversions as real input.

use crate::app::models::Observation;
use crate::app::services::observation_codec::decode_observation;

mod report_tests;

/// Decode a fixture record, panicking on invalid input
pub fn observation(record: &str) -> Observation {
    decode_observation(record).unwrap()
}

/// Eleven AU observations with coordinates (km) and temperature (°C) equal to i
pub fn diagonal_flight() -> Vec<Observation> {
    (0..=10)
        .map(|i| observation(&format!("2014-12-31T13:{:02}|{},{}|{}|AU", 30 + i, i, i, i)))
        .collect()
}
