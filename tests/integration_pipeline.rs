//! Integration tests for the observation pipelines
//!
//! These tests drive the library end to end: a seeded sample file is
//! generated, summarised through the external sort and normalised, and the
//! results are checked against in-memory equivalents.

use balloon_processor::app::services::pipeline::{
    FlightStatsProcessor, generate_file, normalize_file,
};
use balloon_processor::{
    DistanceUnit, GeneratorConfig, Observation, ReportConfig, StatisticKind, TemperatureUnit,
};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Generate a reproducible sample file and return its path
fn generated_file(temp_dir: &TempDir, seed: u64) -> PathBuf {
    let path = temp_dir.path().join("samples.txt");
    let config = GeneratorConfig::default()
        .with_batches(40)
        .with_samples_per_batch(50)
        .with_seed(seed);
    generate_file(&path, &config, false).unwrap();
    path
}

#[test]
fn test_external_sort_matches_in_memory_sort() {
    let temp_dir = TempDir::new().unwrap();
    let path = generated_file(&temp_dir, 2015);

    let mut from_file = FlightStatsProcessor::new();
    let file_run = from_file.process_file(&path).unwrap();

    // Byte-wise sort, the order `sort` produces under LC_ALL=C
    let content = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<&str> = content.lines().collect();
    lines.sort_unstable();
    let mut in_memory = FlightStatsProcessor::new();
    let memory_run = in_memory
        .process_reader(Cursor::new(lines.join("\n")))
        .unwrap();

    assert_eq!(file_run.lines_read, 2_000);
    assert_eq!(file_run.observations_accepted, memory_run.observations_accepted);
    assert_eq!(file_run.lines_discarded, memory_run.lines_discarded);
    assert_eq!(from_file.stations(), in_memory.stations());
    assert_eq!(
        from_file.report(&ReportConfig::default()),
        in_memory.report(&ReportConfig::default())
    );
}

#[test]
fn test_report_has_one_row_per_station() {
    let temp_dir = TempDir::new().unwrap();
    let path = generated_file(&temp_dir, 7);

    let mut processor = FlightStatsProcessor::new();
    processor.process_file(&path).unwrap();

    let config = ReportConfig::new([StatisticKind::MeanTemp, StatisticKind::TotalDistance]);
    let report = processor.report(&config);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(
        lines[0],
        "Observatory Code | Mean Temperature (°C) | Total Distance (Km)"
    );
    for row in &lines[1..] {
        assert_eq!(row.split(" | ").count(), 3);
    }
}

#[test]
fn test_normalised_file_decodes_to_same_observations() {
    let temp_dir = TempDir::new().unwrap();
    let path = generated_file(&temp_dir, 99);
    let normalized = temp_dir.path().join("normalized.txt");

    let run = normalize_file(
        &path,
        &normalized,
        DistanceUnit::Meters,
        TemperatureUnit::Kelvin,
    )
    .unwrap();
    assert_eq!(run.lines_written, run.observations_accepted);

    let decoded: Vec<Observation> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .filter_map(|line| line.parse().ok())
        .collect();
    let rewritten = fs::read_to_string(&normalized).unwrap();
    assert_eq!(decoded.len(), rewritten.lines().count());

    // Meters and Kelvin are the canonical units: the FR encoding is exact
    for (observation, line) in decoded.iter().zip(rewritten.lines()) {
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(
            fields[1],
            format!("{},{}", observation.location.x, observation.location.y)
        );
        assert_eq!(fields[2], observation.temperature.to_string());
        assert_eq!(fields[3], observation.station.code());
    }
}
