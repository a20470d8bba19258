//! Stats command: per-station flight statistics

use crate::Result;
use crate::app::services::pipeline::{FlightStatsProcessor, RunStats};
use crate::cli::args::StatsArgs;
use crate::cli::commands::shared::{print_summary, setup_logging};
use tracing::info;

/// Run the stats command and print the station table to stdout
pub fn run_stats(args: StatsArgs) -> Result<RunStats> {
    setup_logging(&args.verbosity)?;
    args.validate()?;

    let report_config = args.report_config();
    info!("Computing flight statistics for {}", args.file.display());

    let mut processor = FlightStatsProcessor::new();
    let stats = processor.process_file(&args.file)?;

    print!("{}", processor.report(&report_config));

    if args.verbosity.show_progress() {
        print_summary("Flight Statistics Complete", &stats);
    }
    Ok(stats)
}
