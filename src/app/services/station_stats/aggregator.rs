//! Running statistics for a single station

use std::collections::BTreeMap;

use crate::app::models::{Location, Observation, Station};
use crate::constants::{KELVIN_CELSIUS_OFFSET, METERS_PER_KILOMETER};

/// Running statistics for one station
///
/// Temperatures are held in Kelvin and distance in meters; the `*_celsius`
/// and `*_km` accessors convert on read.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    station: Station,
    min_temp: Option<i64>,
    max_temp: Option<i64>,
    sum_temp: i128,
    count: u64,
    last_location: Option<Location>,
    total_distance: f64,
}

impl StationStats {
    /// Create empty statistics for a station
    pub fn new(station: Station) -> Self {
        Self {
            station,
            min_temp: None,
            max_temp: None,
            sum_temp: 0,
            count: 0,
            last_location: None,
            total_distance: 0.0,
        }
    }

    /// Include an observation
    ///
    /// The first observation only records the starting position. Every later
    /// one adds the straight-line distance from the previous position, so
    /// calls must follow the balloon's chronological order.
    pub fn add(&mut self, observation: &Observation) {
        let temperature = observation.temperature;
        self.min_temp = Some(self.min_temp.map_or(temperature, |min| min.min(temperature)));
        self.max_temp = Some(self.max_temp.map_or(temperature, |max| max.max(temperature)));
        self.sum_temp += i128::from(temperature);
        self.count += 1;

        if let Some(last) = &self.last_location {
            self.total_distance += last.distance_to(&observation.location);
        }
        self.last_location = Some(observation.location);
    }

    pub fn station(&self) -> Station {
        self.station
    }

    /// Number of observations included so far
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn min_temp_kelvin(&self) -> Option<i64> {
        self.min_temp
    }

    pub fn max_temp_kelvin(&self) -> Option<i64> {
        self.max_temp
    }

    pub fn min_temp_celsius(&self) -> Option<i64> {
        self.min_temp.map(|k| k - KELVIN_CELSIUS_OFFSET)
    }

    pub fn max_temp_celsius(&self) -> Option<i64> {
        self.max_temp.map(|k| k - KELVIN_CELSIUS_OFFSET)
    }

    /// Mean temperature in Celsius, `None` before the first observation
    pub fn mean_temp_celsius(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum_temp as f64 / self.count as f64 - KELVIN_CELSIUS_OFFSET as f64)
    }

    /// Position of the most recent observation
    pub fn last_location(&self) -> Option<Location> {
        self.last_location
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.total_distance
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance / METERS_PER_KILOMETER as f64
    }
}

/// Statistics for every known station, in station order
#[derive(Debug, Clone, PartialEq)]
pub struct StationStatsSet {
    stations: BTreeMap<Station, StationStats>,
}

impl Default for StationStatsSet {
    fn default() -> Self {
        Self::new()
    }
}

impl StationStatsSet {
    /// Pre-seed empty statistics for all known stations
    pub fn new() -> Self {
        Self {
            stations: Station::ALL
                .into_iter()
                .map(|station| (station, StationStats::new(station)))
                .collect(),
        }
    }

    /// Route an observation to its station's statistics
    pub fn add(&mut self, observation: &Observation) {
        self.stations
            .entry(observation.station)
            .or_insert_with(|| StationStats::new(observation.station))
            .add(observation);
    }

    pub fn get(&self, station: Station) -> Option<&StationStats> {
        self.stations.get(&station)
    }

    /// Statistics in station order
    pub fn iter(&self) -> impl Iterator<Item = &StationStats> {
        self.stations.values()
    }

    /// Total observations across all stations
    pub fn total_observations(&self) -> u64 {
        self.stations.values().map(StationStats::count).sum()
    }
}
