//! Generate command: write a synthetic observation file

use crate::Result;
use crate::app::services::pipeline::{RunStats, generate_file};
use crate::cli::args::GenerateArgs;
use crate::cli::commands::shared::{print_summary, setup_logging};
use tracing::info;

pub fn run_generate(args: GenerateArgs) -> Result<RunStats> {
    setup_logging(&args.verbosity)?;
    args.validate()?;

    let config = args.generator_config();
    if let Some(seed) = config.seed {
        info!("Using seed {}", seed);
    }

    let stats = generate_file(&args.output, &config, args.verbosity.show_progress())?;

    if args.verbosity.show_progress() {
        print_summary("Sample Generation Complete", &stats);
    }
    Ok(stats)
}
