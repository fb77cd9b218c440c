//! Inspect command implementation
//!
//! Loads a metadata document and prints the plant scalars plus, for every
//! dataset, each semantic field with its column name, data type and unit.

use super::shared::{label, print_json};
use crate::Result;
use crate::app::models::{DataType, Family};
use crate::app::services::plant_metadata::{ColumnMap, DtypeMap, PlantMap, PlantMetadata, UnitMap};
use crate::app::services::schema::FamilySchema;
use crate::cli::args::{InspectArgs, OutputFormat};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Inspection report, serialized for `--format json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub file: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: f64,
    pub frequencies: PlantMap<Option<String>>,
    pub columns: ColumnMap,
    pub dtypes: DtypeMap,
    pub units: UnitMap,
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    debug!("Inspect arguments: {:?}", args);

    let metadata = PlantMetadata::load(args.file.as_path())?;
    let report = build_report(&args.file.display().to_string(), &metadata);
    info!(
        "Inspected {} with {} reanalysis products",
        report.file,
        report.columns.reanalysis.len()
    );

    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_human(&report, &metadata));
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    }
}

pub fn build_report(file: &str, metadata: &PlantMetadata) -> InspectReport {
    InspectReport {
        file: file.to_string(),
        latitude: metadata.latitude(),
        longitude: metadata.longitude(),
        capacity: metadata.capacity(),
        frequencies: metadata
            .map_schemas(|schema| schema.frequency().map(|freq| freq.alias().to_string())),
        columns: metadata.column_map(),
        dtypes: metadata.dtype_map(),
        units: metadata.unit_map(),
    }
}

/// Human-readable inspection report
pub fn render_human(report: &InspectReport, metadata: &PlantMetadata) -> String {
    let mut output = format!(
        "{} {}\n\
         Coordinates: ({}, {})\n\
         Capacity:    {} MW\n",
        "Plant metadata".bright_green().bold(),
        report.file.bright_white().bold(),
        report.latitude,
        report.longitude,
        report.capacity
    );

    for family in Family::FIXED {
        if let Some(schema) = metadata.schema(family) {
            render_schema(&mut output, schema);
        }
    }

    if metadata.reanalysis().is_empty() {
        output.push_str(&format!("\n{}\n", "reanalysis: no products".dimmed()));
    }
    for schema in metadata.reanalysis().values() {
        render_schema(&mut output, schema);
    }

    output
}

fn render_schema(output: &mut String, schema: &FamilySchema) {
    let frequency = schema
        .frequency()
        .map(|freq| format!(" ({}, {})", freq.alias(), freq.class()))
        .unwrap_or_default();
    output.push_str(&format!("\n{}{}\n", schema.label().bold(), frequency));

    let dtypes = schema.dtype_map();
    let units = schema.unit_map();
    for (field, column) in schema.column_map() {
        let dtype = dtypes.get(field).map(DataType::as_str).unwrap_or("-");
        let unit = units.get(field).copied().flatten().unwrap_or("-");
        let column = if column == field {
            column.normal()
        } else {
            column.bright_cyan()
        };
        output.push_str(&format!(
            "  {} {} {} {}\n",
            label(field, 18),
            label(&column.to_string(), 24),
            label(dtype, 9),
            unit
        ));
    }
}
