use anyhow::Context;
use balloon_processor::cli::args::{Args, Commands};
use balloon_processor::cli::commands;
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let name = command_name(&command);
    let result = commands::run(command).with_context(|| format!("{} command failed", name));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Stats(_) => "stats",
        Commands::Normalize(_) => "normalize",
        Commands::Generate(_) => "generate",
    }
}

/// Display help information and available commands
fn show_help_and_commands() {
    println!("Balloon Processor - Weather Balloon Observation Tools");
    println!("=====================================================");
    println!();
    println!("Validate, normalise and summarise weather balloon observations");
    println!("of the form TIMESTAMP|X,Y|TEMPERATURE|STATION.");
    println!();
    println!("USAGE:");
    println!("    balloon-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    stats       Compute per-station flight statistics");
    println!("    normalize   Rewrite an observation file in a single unit system");
    println!("    generate    Generate a synthetic observation file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate 250,000 samples:");
    println!("    balloon-processor generate samples.txt");
    println!();
    println!("    # Minimum temperature and total distance per station:");
    println!("    balloon-processor stats samples.txt -i -d");
    println!();
    println!("    # Convert every record to kilometers and Celsius:");
    println!("    balloon-processor normalize samples.txt normalized.txt -d kilometers -t celsius");
    println!();
    println!("For detailed help on any command, use:");
    println!("    balloon-processor <COMMAND> --help");
}
