//! Balloon Processor Library
//!
//! A Rust library for validating, normalising and summarising weather-balloon
//! observations relayed by a fixed set of ground stations.
//!
//! This library provides tools for:
//! - Decoding pipe-delimited observation records into canonical units (Kelvin, meters)
//! - Encoding canonical observations back into any supported unit system
//! - Generating synthetic observation files that follow a drifting random walk
//! - Streaming per-station statistics (temperature extremes and mean, count, distance)
//! - Establishing the chronological ordering the distance accumulation depends on

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod observation_codec;
        pub mod pipeline;
        pub mod sample_generator;
        pub mod station_stats;
        pub mod unit_converter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DistanceUnit, Location, Observation, Station, TemperatureUnit};
pub use config::{GeneratorConfig, ReportConfig, StatisticKind};

/// Result type alias for the balloon processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for balloon observation processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Record does not follow the `TIMESTAMP|X,Y|TEMP|STATION` layout
    #[error("Malformed record: {reason} => {record}")]
    MalformedRecord { reason: String, record: String },

    /// Station code outside the known set
    #[error("Invalid observatory code: {code} => {record}")]
    UnknownStation { code: String, record: String },

    /// Temperature below the absolute-zero floor of the station's native unit
    #[error("Temperature {value} {unit} is below the minimum of {minimum} => {record}")]
    OutOfRangeTemperature {
        value: i64,
        unit: TemperatureUnit,
        minimum: i64,
        record: String,
    },

    /// Unit name outside the recognised set
    #[error("Invalid {kind} unit: {name}")]
    UnsupportedUnit { kind: &'static str, name: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Not enough free space for an output or temporary file
    #[error(
        "Insufficient disk space at '{path}': {required} bytes required, {available} bytes available"
    )]
    InsufficientDiskSpace {
        path: String,
        required: u64,
        available: u64,
    },

    /// External sort of the observation file failed
    #[error("Error while sorting the file: {message}")]
    SortFailed { message: String },
}

impl Error {
    /// Create a malformed record error
    pub fn malformed_record(reason: impl Into<String>, record: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
            record: record.into(),
        }
    }

    /// Create an unknown station error
    pub fn unknown_station(code: impl Into<String>, record: impl Into<String>) -> Self {
        Self::UnknownStation {
            code: code.into(),
            record: record.into(),
        }
    }

    /// Create an out-of-range temperature error
    pub fn out_of_range_temperature(
        value: i64,
        unit: TemperatureUnit,
        minimum: i64,
        record: impl Into<String>,
    ) -> Self {
        Self::OutOfRangeTemperature {
            value,
            unit,
            minimum,
            record: record.into(),
        }
    }

    /// Create an unsupported unit error
    pub fn unsupported_unit(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedUnit {
            kind,
            name: name.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an insufficient disk space error
    pub fn insufficient_disk_space(path: impl Into<String>, required: u64, available: u64) -> Self {
        Self::InsufficientDiskSpace {
            path: path.into(),
            required,
            available,
        }
    }

    /// Create a sort failure error
    pub fn sort_failed(message: impl Into<String>) -> Self {
        Self::SortFailed {
            message: message.into(),
        }
    }

    /// Whether this error describes a single bad input record.
    ///
    /// Record errors are local: the line is discarded and the stream continues.
    /// Every other kind aborts the run.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::UnknownStation { .. }
                | Self::OutOfRangeTemperature { .. }
        )
    }

    /// Human-readable reason of a record error, without the offending text
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::MalformedRecord { reason, .. } => Some(reason.clone()),
            Self::UnknownStation { code, .. } => Some(format!("Invalid observatory code: {}", code)),
            Self::OutOfRangeTemperature { value, unit, .. } => Some(format!(
                "Incorrect temperature value ({}): {}",
                unit.symbol(),
                value
            )),
            _ => None,
        }
    }

    /// Raw text of the offending record, for record errors
    pub fn record(&self) -> Option<&str> {
        match self {
            Self::MalformedRecord { record, .. }
            | Self::UnknownStation { record, .. }
            | Self::OutOfRangeTemperature { record, .. } => Some(record),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
