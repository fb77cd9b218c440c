use clap::Parser;
use plant_metadata::cli::args::{Args, accepted_names};
use plant_metadata::cli::commands;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("plant-metadata - Wind Plant Metadata and Analysis Requirements");
    println!("==============================================================");
    println!();
    println!("USAGE:");
    println!("    plant-metadata <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    requirements    Resolve the columns and frequencies analyses require");
    println!("    inspect         Show the column maps and data types of a metadata file");
    println!("    check           Check a metadata file's frequencies against analyses");
    println!("    help            Show this help message or help for specific commands");
    println!();
    println!("ACCEPTED NAMES:");
    println!("    {}", accepted_names());
    println!();
    println!("EXAMPLES:");
    println!("    # Columns and frequencies needed for an AEP estimate with temperature:");
    println!("    plant-metadata requirements --analyses MonteCarloAEP --option reg_temperature");
    println!();
    println!("    # Everything every analysis needs, as JSON:");
    println!("    plant-metadata requirements --analyses all --format json");
    println!();
    println!("    # Validate a plant document before running wake and electrical losses:");
    println!("    plant-metadata check plant.yaml --analyses WakeLosses,ElectricalLosses");
    println!();
    println!("For detailed help on any command, use:");
    println!("    plant-metadata <COMMAND> --help");
}
