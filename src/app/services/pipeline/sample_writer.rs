//! Writing synthetic observation files

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::app::services::pipeline::disk_space::ensure_free_space;
use crate::app::services::pipeline::stats::RunStats;
use crate::app::services::sample_generator::{SampleGenerator, SampleState};
use crate::config::GeneratorConfig;
use crate::constants::INVALID_LINE;
use crate::{Error, Result};

/// Write `config.batches` batches of `config.samples_per_batch` lines
///
/// Each batch picks a station at random. A batch for the same station as the
/// previous one continues its walk rather than starting over.
pub fn write_samples<W: Write, R: Rng>(
    mut writer: W,
    generator: &mut SampleGenerator<R>,
    config: &GeneratorConfig,
    progress: &ProgressBar,
) -> Result<RunStats> {
    let start = Instant::now();
    let mut run = RunStats::new();
    let mut state = SampleState::new();

    for batch in 0..config.batches {
        let station = generator.random_station();
        debug!("Batch {} for station {}", batch + 1, station);

        for _ in 0..config.samples_per_batch {
            let line = generator.sample(&mut state, station);
            if line == INVALID_LINE {
                run.lines_discarded += 1;
            } else {
                run.observations_accepted += 1;
            }
            writeln!(writer, "{}", line).map_err(|e| Error::io("Failed to write sample", e))?;
            run.lines_written += 1;
        }
        progress.inc(1);
    }

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush samples", e))?;

    run.elapsed = start.elapsed();
    Ok(run)
}

/// Generate a sample file at `path`
///
/// Validates the configuration and checks the output directory can hold the
/// largest file the configuration could produce.
pub fn generate_file(path: &Path, config: &GeneratorConfig, show_progress: bool) -> Result<RunStats> {
    config.validate()?;

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    ensure_free_space(directory, config.estimated_size_bytes())?;

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Cannot create {}", path.display()), e))?;

    let progress = if show_progress {
        let pb = ProgressBar::new(config.batches as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches ({eta}) {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Generating samples");
        pb
    } else {
        ProgressBar::hidden()
    };

    info!(
        "Generating {} samples into {}",
        config.total_samples(),
        path.display()
    );
    let mut generator = SampleGenerator::from_config(config);
    let run = write_samples(BufWriter::new(file), &mut generator, config, &progress)?;

    progress.finish_with_message(format!("{} lines written", run.lines_written));
    info!("Generated {}: {}", path.display(), run.summary());
    Ok(run)
}
