//! Per-station statistics over an observation file

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::app::services::observation_codec::decode_observation;
use crate::app::services::pipeline::disk_space::ensure_free_space;
use crate::app::services::pipeline::line_reader::for_each_line;
use crate::app::services::pipeline::sorter::sort_observation_file;
use crate::app::services::pipeline::stats::RunStats;
use crate::app::services::station_stats::{StationReport, StationStatsSet};
use crate::config::ReportConfig;
use crate::{Error, Result};

/// Streams observation lines into per-station statistics
///
/// Lines that fail validation are logged and skipped; any other failure
/// aborts the run.
#[derive(Debug, Default)]
pub struct FlightStatsProcessor {
    stations: StationStatsSet,
    run_stats: RunStats,
}

impl FlightStatsProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed every line of `reader` through the decoder into the station statistics
    ///
    /// The reader must already be in chronological order for distances to be
    /// meaningful; [`process_file`](Self::process_file) takes care of that.
    pub fn process_reader<R: BufRead>(&mut self, reader: R) -> Result<RunStats> {
        let start = Instant::now();
        let mut run = RunStats::new();

        let lines_read = for_each_line(reader, |line_number, line| {
            match decode_observation(line) {
                Ok(observation) => {
                    self.stations.add(&observation);
                    run.observations_accepted += 1;
                }
                Err(e) if e.is_record_error() => {
                    info!(
                        "Invalid data at line {} will be discarded: {} => {}",
                        line_number,
                        e.reason().unwrap_or_default(),
                        line
                    );
                    run.lines_discarded += 1;
                }
                Err(e) => return Err(e),
            }
            Ok(())
        })?;

        run.lines_read = lines_read;
        run.elapsed = start.elapsed();
        debug!("{}", run.summary());
        self.accumulate(&run);
        Ok(run)
    }

    /// Sort `path` into a temporary file beside it, then stream the sorted copy
    ///
    /// Checks beforehand that the input's directory can hold a full copy.
    pub fn process_file(&mut self, path: &Path) -> Result<RunStats> {
        let start = Instant::now();
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::io(format!("Cannot read {}", path.display()), e))?;
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if metadata.len() == 0 {
            warn!("{} is empty", path.display());
        }
        ensure_free_space(directory, metadata.len())?;

        info!("Sorting {} ({} bytes)", path.display(), metadata.len());
        let sorted = sort_observation_file(path)?;

        let file = File::open(sorted.path()).map_err(|e| {
            Error::io(
                format!("Cannot open sorted file {}", sorted.path().display()),
                e,
            )
        })?;
        let mut run = self.process_reader(BufReader::new(file))?;
        run.elapsed = start.elapsed();

        info!("Processed {}: {}", path.display(), run.summary());
        Ok(run)
    }

    fn accumulate(&mut self, run: &RunStats) {
        self.run_stats.lines_read += run.lines_read;
        self.run_stats.observations_accepted += run.observations_accepted;
        self.run_stats.lines_discarded += run.lines_discarded;
        self.run_stats.elapsed += run.elapsed;
    }

    /// Statistics accumulated so far, one entry per known station
    pub fn stations(&self) -> &StationStatsSet {
        &self.stations
    }

    /// Totals over every reader processed so far
    pub fn run_stats(&self) -> &RunStats {
        &self.run_stats
    }

    /// Render the station table with the selected columns
    pub fn report(&self, config: &ReportConfig) -> String {
        StationReport::new(config).render(self.stations.iter())
    }
}
