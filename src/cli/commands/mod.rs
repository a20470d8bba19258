//! Command implementations for the balloon processor CLI
//!
//! Each command is implemented in its own module and returns the
//! [`RunStats`] of its pipeline.

pub mod generate;
pub mod normalize;
pub mod shared;
pub mod stats;

use crate::app::services::pipeline::RunStats;
use crate::cli::args::Commands;
use crate::Result;

/// Dispatch to the handler of the given subcommand
///
/// - `stats`: Per-station flight statistics table on stdout
/// - `normalize`: Observation file rewritten in one unit system
/// - `generate`: Synthetic observation file
pub fn run(command: Commands) -> Result<RunStats> {
    match command {
        Commands::Stats(args) => stats::run_stats(args),
        Commands::Normalize(args) => normalize::run_normalize(args),
        Commands::Generate(args) => generate::run_generate(args),
    }
}
