//! Command-line argument definitions for the balloon processor
//!
//! This module defines the CLI interface using the clap derive API: one
//! subcommand per pipeline, each carrying its own verbosity flags.

use crate::app::models::{DistanceUnit, TemperatureUnit};
use crate::config::{GeneratorConfig, ReportConfig};
use crate::constants::sampling::{DEFAULT_BATCHES, DEFAULT_SAMPLES_PER_BATCH};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the weather balloon observation processor
///
/// Validates, normalises and summarises observation records relayed by the
/// ground stations, and generates synthetic observation files for testing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "balloon-processor",
    version,
    about = "Validate, normalise and summarise weather balloon observations",
    long_about = "Processes pipe-delimited weather balloon observations of the form \
                  TIMESTAMP|X,Y|TEMPERATURE|STATION, where each ground station reports \
                  in its own units. Computes per-station flight statistics, rewrites \
                  files in a single unit system and generates synthetic sample files."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Compute per-station flight statistics for an observation file
    Stats(StatsArgs),
    /// Rewrite an observation file in a single unit system
    Normalize(NormalizeArgs),
    /// Generate a synthetic observation file
    Generate(GenerateArgs),
}

/// Verbosity flags shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct VerbosityArgs {
    /// Logging verbosity level
    ///
    /// A single `-v` also reports every discarded line with its reason.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Hides progress bars and run summaries.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl VerbosityArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars and summaries (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Observation file to summarise
    ///
    /// A sorted copy is written beside the file while it is processed, so its
    /// directory needs as much free space as the file itself.
    #[arg(value_name = "FILE", help = "Weather balloon observation file")]
    pub file: PathBuf,

    #[arg(short = 'i', long = "min-temp", help = "Minimum Temperature")]
    pub min_temp: bool,

    #[arg(short = 'a', long = "max-temp", help = "Maximum Temperature")]
    pub max_temp: bool,

    #[arg(short = 'e', long = "mean-temp", help = "Mean Temperature")]
    pub mean_temp: bool,

    #[arg(short = 'n', long = "num-obs", help = "Number of Observations")]
    pub num_obs: bool,

    #[arg(short = 'd', long = "total-distance", help = "Total Flight Distance")]
    pub total_distance: bool,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl StatsArgs {
    /// Validate the stats command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Observation file does not exist: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Selected report columns; no flag selects every column
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::from_flags(
            self.min_temp,
            self.max_temp,
            self.mean_temp,
            self.num_obs,
            self.total_distance,
        )
    }
}

/// Arguments for the normalize command
#[derive(Debug, Clone, Parser)]
pub struct NormalizeArgs {
    #[arg(value_name = "INPUT", help = "Weather balloon observation file")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT", help = "Normalised output file")]
    pub output: PathBuf,

    /// Distance unit of the output
    #[arg(
        short = 'd',
        long = "distance-unit",
        value_name = "UNIT",
        default_value = "meters",
        help = "Normalised distance unit [meters | kilometers | miles]"
    )]
    pub distance_unit: DistanceUnit,

    /// Temperature unit of the output
    #[arg(
        short = 't',
        long = "temperature-unit",
        value_name = "UNIT",
        default_value = "kelvin",
        help = "Normalised temperature unit [kelvin | celsius | fahrenheit]"
    )]
    pub temperature_unit: TemperatureUnit,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl NormalizeArgs {
    /// Validate the normalize command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Observation file does not exist: {}",
                self.input.display()
            )));
        }

        if self.input == self.output {
            return Err(Error::configuration(
                "Output file must differ from the input file",
            ));
        }

        Ok(())
    }
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    #[arg(value_name = "OUTPUT", help = "File to write generated samples to")]
    pub output: PathBuf,

    /// Number of station batches
    ///
    /// Each batch picks one station at random and writes consecutive samples
    /// for it.
    #[arg(
        short = 'b',
        long = "batches",
        value_name = "COUNT",
        default_value_t = DEFAULT_BATCHES,
        help = "Total number of batches"
    )]
    pub batches: usize,

    #[arg(
        short = 's',
        long = "samples-per-batch",
        value_name = "COUNT",
        default_value_t = DEFAULT_SAMPLES_PER_BATCH,
        help = "Number of samples for every batch"
    )]
    pub samples_per_batch: usize,

    /// Seed for reproducible output
    #[arg(long = "seed", value_name = "SEED", help = "Random seed for reproducible output")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl GenerateArgs {
    /// Build the generator configuration from the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default()
            .with_batches(self.batches)
            .with_samples_per_batch(self.samples_per_batch);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Validate the generate command arguments
    pub fn validate(&self) -> Result<()> {
        self.generator_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatisticKind;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["balloon-processor"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().command.unwrap()
    }

    #[test]
    fn test_stats_flags() {
        let Commands::Stats(args) = parse(&["stats", "data.txt", "-i", "-d"]) else {
            panic!("expected stats command");
        };

        assert_eq!(args.file, PathBuf::from("data.txt"));
        assert_eq!(
            args.report_config().statistics().collect::<Vec<_>>(),
            vec![StatisticKind::MinTemp, StatisticKind::TotalDistance]
        );
    }

    #[test]
    fn test_stats_without_flags_reports_everything() {
        let Commands::Stats(args) = parse(&["stats", "data.txt"]) else {
            panic!("expected stats command");
        };
        assert_eq!(args.report_config(), ReportConfig::default());
    }

    #[test]
    fn test_stats_validation() {
        let Commands::Stats(args) = parse(&["stats", "/no/such/file.txt"]) else {
            panic!("expected stats command");
        };
        assert!(args.validate().is_err());

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let Commands::Stats(args) = parse(&["stats", path]) else {
            panic!("expected stats command");
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_normalize_defaults() {
        let Commands::Normalize(args) = parse(&["normalize", "in.txt", "out.txt"]) else {
            panic!("expected normalize command");
        };
        assert_eq!(args.distance_unit, DistanceUnit::Meters);
        assert_eq!(args.temperature_unit, TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_normalize_units() {
        let Commands::Normalize(args) =
            parse(&["normalize", "in.txt", "out.txt", "-d", "miles", "-t", "fahrenheit"])
        else {
            panic!("expected normalize command");
        };
        assert_eq!(args.distance_unit, DistanceUnit::Miles);
        assert_eq!(args.temperature_unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_normalize_rejects_unknown_unit() {
        let result = Args::try_parse_from([
            "balloon-processor",
            "normalize",
            "in.txt",
            "out.txt",
            "-d",
            "furlongs",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_rejects_same_output() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let Commands::Normalize(args) = parse(&["normalize", path, path]) else {
            panic!("expected normalize command");
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_generate_defaults_and_seed() {
        let Commands::Generate(args) = parse(&["generate", "out.txt"]) else {
            panic!("expected generate command");
        };
        assert_eq!(args.generator_config(), GeneratorConfig::default());

        let Commands::Generate(args) = parse(&["generate", "out.txt", "-b", "3", "-s", "7", "--seed", "42"])
        else {
            panic!("expected generate command");
        };
        let config = args.generator_config();
        assert_eq!(config.batches, 3);
        assert_eq!(config.samples_per_batch, 7);
        assert_eq!(config.seed, Some(42));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_generate_rejects_zero_batches() {
        let Commands::Generate(args) = parse(&["generate", "out.txt", "-b", "0"]) else {
            panic!("expected generate command");
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut verbosity = VerbosityArgs::default();

        // Default level
        assert_eq!(verbosity.get_log_level(), "warn");

        // Verbose levels
        verbosity.verbose = 1;
        assert_eq!(verbosity.get_log_level(), "info");

        verbosity.verbose = 2;
        assert_eq!(verbosity.get_log_level(), "debug");

        verbosity.verbose = 3;
        assert_eq!(verbosity.get_log_level(), "trace");

        // Quiet mode
        verbosity.quiet = true;
        assert_eq!(verbosity.get_log_level(), "error");
        assert!(!verbosity.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["balloon-processor", "stats", "data.txt", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command() {
        let args = Args::try_parse_from(["balloon-processor"]).unwrap();
        assert!(args.command.is_none());
    }
}
