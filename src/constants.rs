//! Application constants for balloon processor
//!
//! This module contains the station tables, unit factors, sample generation
//! ranges and report layout used throughout the balloon processor.

// =============================================================================
// Observation Record Layout
// =============================================================================

/// Separator between the four record fields
pub const FIELD_SEPARATOR: char = '|';

/// Separator between the two location coordinates
pub const COORDINATE_SEPARATOR: char = ',';

/// Number of fields in a record: timestamp, location, temperature, station
pub const FIELD_COUNT: usize = 4;

/// Exact length of the timestamp field (`YYYY-MM-DDTHH:MM`)
pub const TIMESTAMP_LENGTH: usize = 16;

/// chrono format string for the timestamp field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Literal emitted by the sample generator in place of a valid record
pub const INVALID_LINE: &str = "invalid line";

// =============================================================================
// Unit Conversion Factors
// =============================================================================

/// Offset between Kelvin and Celsius (integer, no fractional part)
pub const KELVIN_CELSIUS_OFFSET: i64 = 273;

/// Fahrenheit offset used for Kelvin conversions
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Kelvin to Fahrenheit scale factor
pub const FAHRENHEIT_SCALE: f64 = 1.8;

/// Meters per kilometer
pub const METERS_PER_KILOMETER: u64 = 1000;

/// Meters per mile (integer approximation)
pub const METERS_PER_MILE: u64 = 1609;

/// Lowest accepted Celsius reading
pub const MIN_CELSIUS: i64 = -273;

/// Lowest accepted Fahrenheit reading
pub const MIN_FAHRENHEIT: i64 = -459;

// =============================================================================
// Sample Generation
// =============================================================================

/// Sample generation ranges
pub mod sampling {
    /// Earliest seeded timestamp (2011-01-01T00:00:00Z) as Unix seconds
    pub const START_TIMESTAMP: i64 = 1_293_840_000;

    /// Latest seeded timestamp (2015-01-31T23:59:59Z) as Unix seconds
    pub const END_TIMESTAMP: i64 = 1_422_748_799;

    /// Seeded coordinate range in meters (inclusive)
    pub const MIN_COORDINATE: u64 = 0;
    pub const MAX_COORDINATE: u64 = 5_000_000;

    /// Seeded temperature range in Kelvin (inclusive)
    pub const MIN_TEMPERATURE: i64 = 213;
    pub const MAX_TEMPERATURE: i64 = 300;

    /// Seconds between consecutive samples of one walk
    pub const STEP_SECONDS: i64 = 60;

    /// Maximum per-step coordinate drift in meters
    pub const MAX_COORDINATE_DRIFT: i64 = 500;

    /// Maximum per-step temperature drift in Kelvin
    pub const MAX_TEMPERATURE_DRIFT: i64 = 1;

    /// Probability of emitting the invalid-line sentinel
    pub const INVALID_LINE_PROBABILITY: f64 = 0.01;

    /// Default number of station batches in a generated file
    pub const DEFAULT_BATCHES: usize = 500;

    /// Default number of samples written per batch
    pub const DEFAULT_SAMPLES_PER_BATCH: usize = 500;

    /// Upper bound on the byte length of one generated line, used for disk estimates
    pub const MAXIMUM_LINE_LENGTH: u64 = 40;
}

// =============================================================================
// Report Layout
// =============================================================================

/// Report layout constants
pub mod report {
    /// Column separator in header and data rows
    pub const COLUMN_SEPARATOR: &str = " | ";

    /// Header of the leading station column
    pub const STATION_HEADER: &str = "Observatory Code";

    pub const MIN_TEMP_HEADER: &str = "Minimum Temperature (°C)";
    pub const MAX_TEMP_HEADER: &str = "Maximum Temperature (°C)";
    pub const MEAN_TEMP_HEADER: &str = "Mean Temperature (°C)";
    pub const OBSERVATION_COUNT_HEADER: &str = "Number of Observations";
    pub const TOTAL_DISTANCE_HEADER: &str = "Total Distance (Km)";

    /// Placeholder for a statistic that is undefined (no observations)
    pub const UNDEFINED_VALUE: &str = "-";
}

// =============================================================================
// External Sort
// =============================================================================

/// Program used to sort observation files lexically
pub const SORT_PROGRAM: &str = "sort";

/// Suffix of the temporary sorted copy
pub const SORTED_FILE_SUFFIX: &str = ".tmp";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sampling_window_bounds() {
        let start = Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2015, 1, 31, 23, 59, 59).unwrap();

        assert_eq!(start.timestamp(), sampling::START_TIMESTAMP);
        assert_eq!(end.timestamp(), sampling::END_TIMESTAMP);
    }

    #[test]
    fn test_header_widths_define_column_widths() {
        assert_eq!(report::STATION_HEADER.chars().count(), 16);
        assert_eq!(report::MIN_TEMP_HEADER.chars().count(), 24);
        assert_eq!(report::MAX_TEMP_HEADER.chars().count(), 24);
        assert_eq!(report::MEAN_TEMP_HEADER.chars().count(), 21);
        assert_eq!(report::OBSERVATION_COUNT_HEADER.chars().count(), 22);
        assert_eq!(report::TOTAL_DISTANCE_HEADER.chars().count(), 19);
    }
}
