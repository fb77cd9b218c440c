//! Command implementations for the plant-metadata CLI
//!
//! Each command is implemented in its own module.

pub mod check;
pub mod inspect;
pub mod requirements;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};
use shared::setup_logging;
use tracing::debug;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `requirements`: resolve analysis requirements
/// - `inspect`: describe a metadata document
/// - `check`: validate a document's frequencies against analyses
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    match args.get_command()? {
        Commands::Requirements(requirements_args) => {
            requirements::run_requirements(requirements_args)
        }
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
