//! Normalize command: rewrite a file in one unit system

use crate::Result;
use crate::app::services::pipeline::{RunStats, normalize_file};
use crate::cli::args::NormalizeArgs;
use crate::cli::commands::shared::{print_summary, setup_logging};

pub fn run_normalize(args: NormalizeArgs) -> Result<RunStats> {
    setup_logging(&args.verbosity)?;
    args.validate()?;

    let stats = normalize_file(
        &args.input,
        &args.output,
        args.distance_unit,
        args.temperature_unit,
    )?;

    if args.verbosity.show_progress() {
        print_summary("Normalisation Complete", &stats);
    }
    Ok(stats)
}
