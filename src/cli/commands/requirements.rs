//! Requirements command implementation
//!
//! Resolves the columns and sampling frequencies a set of analyses needs from
//! each data family and prints them.

use super::shared::{label, print_json};
use crate::Result;
use crate::app::models::{ConditionalFlag, Family};
use crate::app::services::requirements::{
    ColumnRequirements, FrequencyRequirements, columns_for, frequencies_for,
};
use crate::cli::args::{OutputFormat, RequirementsArgs};
use colored::*;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Requirements report, serialized for `--format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementsReport {
    pub analyses: Vec<String>,
    pub options: BTreeSet<ConditionalFlag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<FrequencyRequirements>,
}

/// Requirements command runner
pub fn run_requirements(args: RequirementsArgs) -> Result<()> {
    debug!("Requirements arguments: {:?}", args);

    let report = build_report(&args);
    info!(
        "Resolved requirements for {} across {} families",
        report.analyses.join(", "),
        report_families(&report).len()
    );

    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_human(&report));
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    }
}

/// Resolve the requested requirement kinds from one selection
pub fn build_report(args: &RequirementsArgs) -> RequirementsReport {
    let flags = args.flags();
    RequirementsReport {
        analyses: args.analyses.names(),
        columns: args
            .which
            .includes_columns()
            .then(|| columns_for(&args.analyses, &flags)),
        frequencies: args
            .which
            .includes_frequency()
            .then(|| frequencies_for(&args.analyses)),
        options: flags,
    }
}

fn report_families(report: &RequirementsReport) -> BTreeSet<Family> {
    let columns = report.columns.iter().flat_map(|columns| columns.keys());
    let frequencies = report.frequencies.iter().flat_map(|freqs| freqs.keys());
    columns.chain(frequencies).copied().collect()
}

/// Human-readable requirements report
pub fn render_human(report: &RequirementsReport) -> String {
    let mut output = format!(
        "{} {}\n",
        "Requirements for".bright_green().bold(),
        report.analyses.join(", ").bright_white().bold()
    );

    let options = if report.options.is_empty() {
        "none".to_string()
    } else {
        report
            .options
            .iter()
            .map(|flag| flag.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    output.push_str(&format!("Options: {}\n", options));

    if let Some(columns) = &report.columns {
        output.push_str(&format!("\n{}\n", "Columns".bold()));
        for (family, fields) in columns {
            let fields: Vec<&str> = fields.iter().copied().collect();
            output.push_str(&format!(
                "  {} {}\n",
                label(family.as_str(), 12),
                fields.join(", ")
            ));
        }
    }

    if let Some(frequencies) = &report.frequencies {
        output.push_str(&format!("\n{}\n", "Accepted frequencies".bold()));
        for (family, classes) in frequencies {
            let accepted = if classes.is_empty() {
                "none (requirements conflict)".bright_red().bold().to_string()
            } else {
                classes
                    .iter()
                    .map(|class| class.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!("  {} {}\n", label(family.as_str(), 12), accepted));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::FrequencyClass;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;

    fn requirements_args(argv: &[&str]) -> RequirementsArgs {
        let mut full = vec!["plant-metadata", "requirements"];
        full.extend_from_slice(argv);
        match Args::try_parse_from(full).unwrap().get_command().unwrap() {
            Commands::Requirements(args) => args,
            other => panic!("expected requirements command, got {:?}", other),
        }
    }

    #[test]
    fn test_report_for_electrical_losses() {
        let report = build_report(&requirements_args(&["-a", "ElectricalLosses"]));

        let columns = report.columns.as_ref().unwrap();
        assert_eq!(columns.len(), 2);
        assert!(columns[&Family::Scada].contains("WTUR_W"));
        assert_eq!(
            report.frequencies.as_ref().unwrap()[&Family::Meter],
            FrequencyClass::Monthly.at_least()
        );
        assert_eq!(report.analyses, vec!["ElectricalLosses"]);
    }

    #[test]
    fn test_which_limits_the_report() {
        let report = build_report(&requirements_args(&["-a", "all", "--which", "frequency"]));
        assert!(report.columns.is_none());
        assert!(report.frequencies.is_some());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("columns").is_none());
        assert!(json["frequencies"]["scada"].is_array());
    }

    #[test]
    fn test_options_add_conditional_columns() {
        let report = build_report(&requirements_args(&[
            "-a",
            "MonteCarloAEP",
            "--option",
            "reg_temperature",
        ]));

        assert!(report.columns.unwrap()[&Family::Reanalysis].contains("WMETR_EnvTmp"));
        assert!(report.options.contains(&ConditionalFlag::RegTemperature));
    }

    #[test]
    fn test_render_human_lists_every_family() {
        colored::control::set_override(false);
        let report = build_report(&requirements_args(&["-a", "ElectricalLosses"]));
        let output = render_human(&report);

        assert!(output.contains("Requirements for ElectricalLosses"));
        assert!(output.contains("Options: none"));
        assert!(output.contains("MMTR_SupWh"));
        assert!(output.contains("asset_id, WTUR_W") || output.contains("WTUR_W, asset_id"));
        assert!(output.contains("monthly, weekly, daily"));
    }

    #[test]
    fn test_render_human_flags_conflicts() {
        colored::control::set_override(false);
        let mut frequencies = FrequencyRequirements::new();
        frequencies.insert(Family::Scada, BTreeSet::new());
        let report = RequirementsReport {
            analyses: vec!["MonthlyOnly".to_string(), "HourlyOnly".to_string()],
            options: BTreeSet::new(),
            columns: None,
            frequencies: Some(frequencies),
        };

        assert!(render_human(&report).contains("none (requirements conflict)"));
    }
}
