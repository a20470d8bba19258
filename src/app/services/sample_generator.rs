//! Synthetic observation records
//!
//! A sample walk starts at a random instant, position and temperature and
//! then drifts: each further sample for the same station is one minute later,
//! up to 500 m away on each axis and within 1 K of the previous temperature.
//! Asking for a different station starts a new walk.
//!
//! The walk position is held in a [`SampleState`] owned by the caller, and
//! the random source is injected so runs can be reproduced from a seed.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::app::models::{Location, Observation, Station};
use crate::app::services::observation_codec::encode_native;
use crate::config::GeneratorConfig;
use crate::constants::{INVALID_LINE, sampling};

/// Position of one sample walk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleState {
    current: Option<Observation>,
}

impl SampleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Station of the walk in progress
    pub fn station(&self) -> Option<Station> {
        self.current.as_ref().map(|obs| obs.station)
    }

    /// Most recent sample of the walk, valid or not when it was emitted
    pub fn current(&self) -> Option<&Observation> {
        self.current.as_ref()
    }

    /// Forget the walk so the next sample reseeds
    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Produces observation records following per-station random walks
#[derive(Debug)]
pub struct SampleGenerator<R: Rng> {
    rng: R,
    invalid_line_probability: f64,
}

impl SampleGenerator<StdRng> {
    /// Generator seeded from the configuration, or from the OS when no seed is set
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng).with_invalid_line_probability(config.invalid_line_probability)
    }
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            invalid_line_probability: sampling::INVALID_LINE_PROBABILITY,
        }
    }

    /// Probability in `[0, 1]` of emitting the invalid-line sentinel
    pub fn with_invalid_line_probability(mut self, probability: f64) -> Self {
        self.invalid_line_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Pick a station uniformly at random
    pub fn random_station(&mut self) -> Station {
        Station::ALL[self.rng.random_range(0..Station::ALL.len())]
    }

    /// Produce the next record of the walk in `state` for `station`
    ///
    /// The walk advances even when the sentinel is emitted instead of a record.
    pub fn sample(&mut self, state: &mut SampleState, station: Station) -> String {
        let next = match state.current.as_ref() {
            Some(previous) if previous.station == station => self.step(previous),
            _ => {
                let seeded = self.seed(station);
                trace!("Seeded new walk for {}: {:?}", station, seeded);
                seeded
            }
        };

        let line = if self.rng.random_bool(self.invalid_line_probability) {
            INVALID_LINE.to_string()
        } else {
            encode_native(&next)
        };
        state.current = Some(next);
        line
    }

    fn seed(&mut self, station: Station) -> Observation {
        let seconds = self
            .rng
            .random_range(sampling::START_TIMESTAMP..=sampling::END_TIMESTAMP);
        let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0).unwrap_or(DateTime::UNIX_EPOCH);
        let location = Location::new(
            self.rng
                .random_range(sampling::MIN_COORDINATE..=sampling::MAX_COORDINATE),
            self.rng
                .random_range(sampling::MIN_COORDINATE..=sampling::MAX_COORDINATE),
        );
        let temperature = self
            .rng
            .random_range(sampling::MIN_TEMPERATURE..=sampling::MAX_TEMPERATURE);

        Observation::new(timestamp, location, temperature, station)
    }

    fn step(&mut self, previous: &Observation) -> Observation {
        let drift = sampling::MAX_COORDINATE_DRIFT;
        let location = Location::new(
            previous
                .location
                .x
                .saturating_add_signed(self.rng.random_range(-drift..=drift)),
            previous
                .location
                .y
                .saturating_add_signed(self.rng.random_range(-drift..=drift)),
        );
        let temperature_drift = self
            .rng
            .random_range(-sampling::MAX_TEMPERATURE_DRIFT..=sampling::MAX_TEMPERATURE_DRIFT);

        Observation::new(
            previous.timestamp + Duration::seconds(sampling::STEP_SECONDS),
            location,
            (previous.temperature + temperature_drift).max(0),
            previous.station,
        )
    }
}
