//! Configuration management and validation.
//!
//! Provides the report column selection consumed by the station statistics
//! renderer and the settings of the sample file generator.

use crate::constants::sampling;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Statistic columns a report can include
///
/// Declaration order is the column order in rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    MinTemp,
    MaxTemp,
    MeanTemp,
    ObservationCount,
    TotalDistance,
}

impl StatisticKind {
    /// Every statistic, in column order
    pub const ALL: [StatisticKind; 5] = [
        StatisticKind::MinTemp,
        StatisticKind::MaxTemp,
        StatisticKind::MeanTemp,
        StatisticKind::ObservationCount,
        StatisticKind::TotalDistance,
    ];
}

/// Selection of statistic columns for the station report
///
/// The station column is not part of the selection; it is always rendered first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    statistics: BTreeSet<StatisticKind>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            statistics: StatisticKind::ALL.into_iter().collect(),
        }
    }
}

impl ReportConfig {
    /// Build from an explicit list; an empty list selects every statistic
    pub fn new(statistics: impl IntoIterator<Item = StatisticKind>) -> Self {
        let statistics: BTreeSet<StatisticKind> = statistics.into_iter().collect();
        if statistics.is_empty() {
            return Self::default();
        }
        Self { statistics }
    }

    /// Build from one boolean flag per statistic; no flags set selects every statistic
    pub fn from_flags(
        min_temp: bool,
        max_temp: bool,
        mean_temp: bool,
        observation_count: bool,
        total_distance: bool,
    ) -> Self {
        let flags = [min_temp, max_temp, mean_temp, observation_count, total_distance];
        let config = Self::new(
            StatisticKind::ALL
                .into_iter()
                .zip(flags)
                .filter_map(|(kind, enabled)| enabled.then_some(kind)),
        );
        debug!("Report columns: {:?}", config.statistics);
        config
    }

    /// Add a statistic to the selection
    pub fn with_statistic(mut self, kind: StatisticKind) -> Self {
        self.statistics.insert(kind);
        self
    }

    /// Enabled statistics in column order
    pub fn statistics(&self) -> impl Iterator<Item = StatisticKind> + '_ {
        self.statistics.iter().copied()
    }

    pub fn includes(&self, kind: StatisticKind) -> bool {
        self.statistics.contains(&kind)
    }
}

/// Settings for synthetic observation files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of station batches; each batch picks one station at random
    pub batches: usize,

    /// Consecutive samples written per batch, one minute apart
    pub samples_per_batch: usize,

    /// Seed for reproducible output (random when absent)
    pub seed: Option<u64>,

    /// Probability of writing the invalid-line sentinel instead of a record
    pub invalid_line_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batches: sampling::DEFAULT_BATCHES,
            samples_per_batch: sampling::DEFAULT_SAMPLES_PER_BATCH,
            seed: None,
            invalid_line_probability: sampling::INVALID_LINE_PROBABILITY,
        }
    }
}

impl GeneratorConfig {
    pub fn with_batches(mut self, batches: usize) -> Self {
        self.batches = batches;
        self
    }

    pub fn with_samples_per_batch(mut self, samples_per_batch: usize) -> Self {
        self.samples_per_batch = samples_per_batch;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_invalid_line_probability(mut self, probability: f64) -> Self {
        self.invalid_line_probability = probability;
        self
    }

    /// Total number of lines the configuration produces
    pub fn total_samples(&self) -> u64 {
        self.batches as u64 * self.samples_per_batch as u64
    }

    /// Upper bound on the size of the generated file in bytes
    pub fn estimated_size_bytes(&self) -> u64 {
        self.total_samples()
            .saturating_mul(sampling::MAXIMUM_LINE_LENGTH)
    }

    /// Validate generator settings
    pub fn validate(&self) -> Result<()> {
        if self.batches == 0 {
            return Err(Error::configuration("Number of batches must be at least 1"));
        }

        if self.samples_per_batch == 0 {
            return Err(Error::configuration(
                "Number of samples per batch must be at least 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.invalid_line_probability) {
            return Err(Error::configuration(format!(
                "Invalid line probability must be between 0 and 1, got {}",
                self.invalid_line_probability
            )));
        }

        Ok(())
    }
}
