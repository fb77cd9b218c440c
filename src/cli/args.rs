//! Command-line argument definitions for plant-metadata
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::ConditionalFlag;
use crate::app::services::requirements::AnalysisSelection;
use crate::constants::{ANALYSIS_NAMES, CONDITIONAL_FLAG_NAMES};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// CLI arguments for the plant metadata tool
///
/// Inspects wind plant metadata documents and resolves the data each
/// performance analysis requires from them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plant-metadata",
    version,
    about = "Inspect wind plant metadata and resolve analysis data requirements",
    long_about = "Describes the operational datasets of a wind power plant (SCADA, meter, \
                  tower, status, curtailment, asset and reanalysis data), maps their semantic \
                  fields to actual column names, and resolves the columns and sampling \
                  frequencies required by a set of analyses."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Resolve the columns and sampling frequencies required by analyses
    Requirements(RequirementsArgs),
    /// Show the coordinates, column maps and data types of a metadata document
    Inspect(InspectArgs),
    /// Check a metadata document's sampling frequencies against analyses
    Check(CheckArgs),
}

/// Arguments for the requirements command
#[derive(Debug, Clone, Parser)]
pub struct RequirementsArgs {
    /// Analyses to resolve (comma-separated list, or `all`)
    #[arg(
        short = 'a',
        long = "analyses",
        value_name = "LIST",
        help = "Comma-separated list of analyses, or 'all'",
        long_help = "Analyses to resolve as a comma-separated list.\n\
                     Available analyses:\n  \
                     MonteCarloAEP, TurbineLongTermGrossEnergy, ElectricalLosses, WakeLosses\n\n\
                     Use 'all' to resolve every analysis."
    )]
    pub analyses: AnalysisSelection,

    /// Optional analysis configuration flags that add conditional columns
    #[arg(
        short = 'o',
        long = "option",
        value_name = "FLAG",
        help = "Enable an analysis option (reg_temperature, reg_wind_direction); repeatable"
    )]
    pub options: Vec<ConditionalFlag>,

    /// Which requirements to print
    #[arg(long = "which", value_enum, default_value = "both")]
    pub which: Which,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Metadata document (.json, .yaml or .yml)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Metadata document (.json, .yaml or .yml)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Analyses to check against (comma-separated list, or `all`)
    #[arg(
        short = 'a',
        long = "analyses",
        value_name = "LIST",
        help = "Comma-separated list of analyses, or 'all'"
    )]
    pub analyses: AnalysisSelection,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Requirement kinds printed by the requirements command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Which {
    /// Required columns per family
    Columns,
    /// Accepted sampling frequencies per family
    Frequency,
    /// Both columns and frequencies
    Both,
}

impl Which {
    pub fn includes_columns(&self) -> bool {
        matches!(self, Which::Columns | Which::Both)
    }

    pub fn includes_frequency(&self) -> bool {
        matches!(self, Which::Frequency | Which::Both)
    }
}

impl Args {
    /// Get the command, failing when none was given
    pub fn get_command(&self) -> Result<Commands> {
        self.command.clone().ok_or_else(|| {
            Error::configuration(
                "No command given. Use one of: requirements, inspect, check".to_string(),
            )
        })
    }

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
}

impl RequirementsArgs {
    /// Active conditional flags, de-duplicated
    pub fn flags(&self) -> BTreeSet<ConditionalFlag> {
        self.options.iter().copied().collect()
    }
}

/// Usage hint listing the names accepted by `--analyses` and `--option`
pub fn accepted_names() -> String {
    format!(
        "analyses: {}, all; options: {}",
        ANALYSIS_NAMES.join(", "),
        CONDITIONAL_FLAG_NAMES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::AnalysisType;

    #[test]
    fn test_requirements_args() {
        let args = Args::try_parse_from([
            "plant-metadata",
            "requirements",
            "--analyses",
            "ElectricalLosses, WakeLosses",
            "--option",
            "reg_temperature",
            "--option",
            "reg_temperature",
            "--which",
            "columns",
        ])
        .unwrap();

        match args.get_command().unwrap() {
            Commands::Requirements(requirements) => {
                assert_eq!(
                    requirements.analyses.analyses(),
                    vec![AnalysisType::ElectricalLosses, AnalysisType::WakeLosses]
                );
                assert_eq!(requirements.flags().len(), 1);
                assert_eq!(requirements.which, Which::Columns);
                assert_eq!(requirements.output_format, OutputFormat::Human);
            }
            other => panic!("expected requirements command, got {:?}", other),
        }
    }

    #[test]
    fn test_all_wildcard() {
        let args =
            Args::try_parse_from(["plant-metadata", "check", "plant.yaml", "-a", "all"]).unwrap();

        match args.get_command().unwrap() {
            Commands::Check(check) => {
                assert_eq!(check.analyses, AnalysisSelection::All);
                assert_eq!(check.file, PathBuf::from("plant.yaml"));
            }
            other => panic!("expected check command, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(
            Args::try_parse_from(["plant-metadata", "requirements", "-a", "SolarPotential"])
                .is_err()
        );
        assert!(
            Args::try_parse_from([
                "plant-metadata",
                "requirements",
                "-a",
                "all",
                "--option",
                "reg_pressure"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_log_level() {
        let args =
            Args::try_parse_from(["plant-metadata", "-vv", "inspect", "plant.json"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["plant-metadata", "inspect", "plant.json", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");

        assert!(Args::try_parse_from(["plant-metadata", "-q", "-v", "inspect", "x.json"]).is_err());
    }

    #[test]
    fn test_missing_command() {
        let args = Args::try_parse_from(["plant-metadata"]).unwrap();
        assert!(args.get_command().unwrap_err().is_configuration());
    }
}
