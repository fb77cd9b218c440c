//! Check command implementation
//!
//! Loads a metadata document and validates its configured sampling
//! frequencies against the requirements of the selected analyses. Any
//! failure is returned as an error so the binary exits non-zero.

use super::shared::{label, print_json};
use crate::Result;
use crate::app::models::Family;
use crate::app::services::plant_metadata::PlantMetadata;
use crate::app::services::requirements::FrequencyRequirements;
use crate::cli::args::{CheckArgs, OutputFormat};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One checked dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedDataset {
    pub family: Family,
    pub label: String,
    pub frequency: String,
}

/// Successful check report, serialized for `--format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub analyses: Vec<String>,
    pub accepted: FrequencyRequirements,
    pub checked: Vec<CheckedDataset>,
}

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<()> {
    debug!("Check arguments: {:?}", args);

    let metadata = PlantMetadata::load(args.file.as_path())?;
    let file = args.file.display().to_string();
    let report = build_report(&file, &args.analyses.names(), &metadata)?;
    info!(
        "{} passed frequency checks for {} datasets",
        report.file,
        report.checked.len()
    );

    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_human(&report));
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    }
}

/// Validate the metadata and describe every dataset that was checked
pub fn build_report(
    file: &str,
    analyses: &[String],
    metadata: &PlantMetadata,
) -> Result<CheckReport> {
    let accepted = metadata.validate_frequencies(analyses)?;

    let mut checked = Vec::new();
    for family in accepted.keys() {
        for schema in metadata.schemas(*family) {
            if let Some(frequency) = schema.frequency() {
                checked.push(CheckedDataset {
                    family: *family,
                    label: schema.label().to_string(),
                    frequency: frequency.alias().to_string(),
                });
            }
        }
    }

    Ok(CheckReport {
        file: file.to_string(),
        analyses: analyses.to_vec(),
        accepted,
        checked,
    })
}

/// Human-readable check report
pub fn render_human(report: &CheckReport) -> String {
    let mut output = format!(
        "{} {} satisfies {}\n",
        "✓".bright_green().bold(),
        report.file.bright_white().bold(),
        report.analyses.join(", ")
    );

    let by_label: BTreeMap<&str, &CheckedDataset> = report
        .checked
        .iter()
        .map(|dataset| (dataset.label.as_str(), dataset))
        .collect();
    for (name, dataset) in by_label {
        let accepted = report
            .accepted
            .get(&dataset.family)
            .and_then(|classes| classes.iter().next())
            .map(|coarsest| format!("{} or finer", coarsest))
            .unwrap_or_default();
        output.push_str(&format!(
            "  {} {} ({})\n",
            label(name, 18),
            label(&dataset.frequency, 8),
            accepted
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn names(analyses: &[&str]) -> Vec<String> {
        analyses.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_report_lists_checked_datasets() {
        let metadata = PlantMetadata::load(json!({
            "meter": { "frequency": "MS" },
            "reanalysis": { "era5": { "frequency": "H" } }
        }))
        .unwrap();

        let report = build_report("plant.yaml", &names(&["MonteCarloAEP"]), &metadata).unwrap();
        let labels: Vec<_> = report.checked.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["meter", "curtail", "reanalysis.era5"]);
    }

    #[test]
    fn test_report_propagates_mismatch() {
        let metadata = PlantMetadata::load(json!({ "scada": { "frequency": "D" } })).unwrap();

        let err = build_report("plant.yaml", &names(&["WakeLosses"]), &metadata).unwrap_err();
        assert!(matches!(err, Error::FrequencyMismatch { .. }));
    }

    #[test]
    fn test_render_human() {
        colored::control::set_override(false);
        let metadata = PlantMetadata::load(json!({})).unwrap();
        let report = build_report("plant.yaml", &names(&["ElectricalLosses"]), &metadata).unwrap();
        let output = render_human(&report);

        assert!(output.contains("plant.yaml satisfies ElectricalLosses"));
        assert!(output.contains("monthly or finer"));
        assert!(output.contains("daily or finer"));
    }
}
