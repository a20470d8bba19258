//! Streaming pipelines over observation files
//!
//! This module holds the thin orchestration around the codec and the station
//! statistics:
//! - [`disk_space`] - Free-space preflight before writing large files
//! - [`sorter`] - Lexical sort establishing per-station chronological order
//! - [`line_reader`] - One-line-at-a-time reading with line numbers
//! - [`flight_stats`] - Sorted stream into per-station statistics
//! - [`normalizer`] - Re-encoding a file in requested units
//! - [`sample_writer`] - Writing synthetic observation files
//! - [`stats`] - Run counters shared by the pipelines
//!
//! ## Ordering contract
//!
//! Records start with a fixed-width `YYYY-MM-DDTHH:MM` timestamp, so sorting
//! whole lines byte-wise orders them chronologically. Every station therefore
//! receives its observations in timestamp order, which is what distance
//! accumulation requires. Only one line is held in memory at a time.

pub mod disk_space;
pub mod flight_stats;
pub mod line_reader;
pub mod normalizer;
pub mod sample_writer;
pub mod sorter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use flight_stats::FlightStatsProcessor;
pub use normalizer::{normalize_file, normalize_stream};
pub use sample_writer::{generate_file, write_samples};
pub use sorter::sort_observation_file;
pub use stats::RunStats;
