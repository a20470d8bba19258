//! Counters for one pipeline run

use std::time::Duration;

/// Statistics for a pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Lines read from the input
    pub lines_read: u64,
    /// Lines decoded into valid observations
    pub observations_accepted: u64,
    /// Lines rejected by validation
    pub lines_discarded: u64,
    /// Lines written to the output
    pub lines_written: u64,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl RunStats {
    /// Create new empty run statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of read lines that were accepted
    pub fn acceptance_rate(&self) -> f64 {
        if self.lines_read == 0 {
            100.0
        } else {
            (self.observations_accepted as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Read {} lines: {} accepted ({:.1}%), {} discarded, {} written in {}ms",
            self.lines_read,
            self.observations_accepted,
            self.acceptance_rate(),
            self.lines_discarded,
            self.lines_written,
            self.elapsed.as_millis()
        )
    }
}
