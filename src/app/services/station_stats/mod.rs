//! Per-station flight statistics
//!
//! - [`aggregator`] - Running statistics for one station
//! - [`report`] - Configurable tabular rendering of the statistics
//!
//! Distance accumulation assumes each station receives its observations in
//! non-decreasing timestamp order. The aggregator does not check this; the
//! pipeline establishes it by sorting input lines before streaming them.

pub mod aggregator;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregator::{StationStats, StationStatsSet};
pub use report::{ColumnFormat, ColumnSpec, StationReport, StatisticValue};
