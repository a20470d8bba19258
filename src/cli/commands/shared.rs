//! Shared components for CLI commands
//!
//! Logging setup and the run summary printed after every command.

use crate::Result;
use crate::app::services::pipeline::RunStats;
use crate::cli::args::VerbosityArgs;
use colored::*;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level derived from the verbosity flags. Calling
/// this more than once keeps the first subscriber.
pub fn setup_logging(verbosity: &VerbosityArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = verbosity.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("balloon_processor={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if initialized {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Print a coloured summary of a run to stderr
pub fn print_summary(title: &str, stats: &RunStats) {
    eprintln!("\n{}", title.bright_green().bold());
    eprintln!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.elapsed.as_millis().to_string().bright_white()
    );
    if stats.lines_read > 0 {
        eprintln!(
            "  {} {}",
            "Lines read:".bright_cyan(),
            stats.lines_read.to_string().bright_white()
        );
    }
    eprintln!(
        "  {} {}",
        "Valid observations:".bright_cyan(),
        stats.observations_accepted.to_string().bright_white().bold()
    );
    if stats.lines_discarded > 0 {
        eprintln!(
            "  {} {}",
            "Invalid lines:".bright_red(),
            stats.lines_discarded.to_string().bright_red().bold()
        );
    }
    if stats.lines_written > 0 {
        eprintln!(
            "  {} {}",
            "Lines written:".bright_cyan(),
            stats.lines_written.to_string().bright_white()
        );
    }
}
