//! Observation codec for pipe-delimited balloon records
//!
//! Records have the layout `TIMESTAMP|X,Y|TEMP|STATION`, expressed in the
//! relaying station's native units. Decoding validates a record and converts
//! it into a canonical [`Observation`](crate::app::models::Observation)
//! (Kelvin, meters); encoding renders a canonical observation in any
//! requested unit system.
//!
//! ## Architecture
//!
//! - [`decoder`] - Record validation and conversion to canonical units
//! - [`encoder`] - Rendering canonical observations in requested units
//!
//! ## Usage
//!
//! ```rust
//! use balloon_processor::app::services::observation_codec::{decode_observation, encode_observation};
//! use balloon_processor::{DistanceUnit, TemperatureUnit};
//!
//! # fn example() -> balloon_processor::Result<()> {
//! let obs = decode_observation("2014-12-31T13:44|10,5|243|AU")?;
//! let text = encode_observation(&obs, Some(DistanceUnit::Miles), Some(TemperatureUnit::Fahrenheit));
//! assert_eq!(text, "2014-12-31T13:44|6,3|470|AU");
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod encoder;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use decoder::decode_observation;
pub use encoder::{encode_native, encode_observation, encode_with_unit_names};
