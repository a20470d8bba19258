//! Re-encoding observation files in a single unit system
//!
//! Every valid line is decoded from its station's native units and written
//! back in the requested ones. Invalid lines are dropped from the output.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::app::models::{DistanceUnit, TemperatureUnit};
use crate::app::services::observation_codec::{decode_observation, encode_observation};
use crate::app::services::pipeline::disk_space::ensure_free_space;
use crate::app::services::pipeline::line_reader::for_each_line;
use crate::app::services::pipeline::stats::RunStats;
use crate::{Error, Result};

/// Normalise every line of `reader` into `writer`
pub fn normalize_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    distance_unit: DistanceUnit,
    temperature_unit: TemperatureUnit,
) -> Result<RunStats> {
    let start = Instant::now();
    let mut run = RunStats::new();
    debug!(
        "Normalising to distance unit {} and temperature unit {}",
        distance_unit, temperature_unit
    );

    let lines_read = for_each_line(reader, |line_number, line| {
        match decode_observation(line) {
            Ok(observation) => {
                let encoded =
                    encode_observation(&observation, Some(distance_unit), Some(temperature_unit));
                writeln!(writer, "{}", encoded)
                    .map_err(|e| Error::io("Failed to write normalised record", e))?;
                run.observations_accepted += 1;
                run.lines_written += 1;
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

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush normalised output", e))?;

    run.lines_read = lines_read;
    run.elapsed = start.elapsed();
    Ok(run)
}

/// Normalise the file at `input` into a new file at `output`
///
/// The output directory must have room for a file as large as the input.
pub fn normalize_file(
    input: &Path,
    output: &Path,
    distance_unit: DistanceUnit,
    temperature_unit: TemperatureUnit,
) -> Result<RunStats> {
    let input_file = File::open(input)
        .map_err(|e| Error::io(format!("Cannot open {}", input.display()), e))?;
    let input_size = input_file
        .metadata()
        .map_err(|e| Error::io(format!("Cannot read {}", input.display()), e))?
        .len();

    let output_dir = output
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    ensure_free_space(output_dir, input_size)?;

    let output_file = File::create(output)
        .map_err(|e| Error::io(format!("Cannot create {}", output.display()), e))?;

    info!("Normalising {} into {}", input.display(), output.display());
    let run = normalize_stream(
        BufReader::new(input_file),
        BufWriter::new(output_file),
        distance_unit,
        temperature_unit,
    )?;
    info!("Normalised {}: {}", input.display(), run.summary());
    Ok(run)
}
