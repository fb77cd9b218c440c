//! Family schema service
//!
//! A [`FamilySchema`] maps a family's semantic fields to the column names one
//! plant actually uses, alongside the fixed data types and units of those
//! fields and the family's native sampling frequency. Schemas are built by a
//! single validating factory from a partial mapping and never change afterwards.

use crate::app::models::{DataType, Family, FrequencyClass};
use crate::constants::{DEFAULT_FREQUENCY, FREQUENCY_KEY};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub mod fields;
pub mod frequency;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use fields::{FieldKind, FieldSpec, fields_for};
pub use frequency::Frequency;

/// Column mapping, types, units and sampling frequency for one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySchema {
    /// Family this schema describes
    family: Family,

    /// Label used in diagnostics (`scada`, `reanalysis.era5`, ...)
    label: String,

    /// Field table the schema was built from
    fields: &'static [FieldSpec],

    /// Semantic field to column name
    columns: BTreeMap<&'static str, String>,

    /// Column name to semantic field
    reversed: BTreeMap<String, &'static str>,

    /// Native sampling frequency, absent for families without a time index
    frequency: Option<Frequency>,
}

impl FamilySchema {
    /// Build a family schema from a partial mapping
    ///
    /// Keys outside the family's field table are ignored, so a larger combined
    /// document can be passed as-is. Missing keys take the field's default.
    pub fn from_partial_mapping(family: Family, input: &Map<String, Value>) -> Result<Self> {
        Self::build(family, family.as_str(), fields_for(family), input)
    }

    /// Build the schema of a named reanalysis product
    pub fn reanalysis_product(product: &str, input: &Map<String, Value>) -> Result<Self> {
        Self::build(
            Family::Reanalysis,
            &format!("{}.{}", Family::Reanalysis, product),
            fields_for(Family::Reanalysis),
            input,
        )
    }

    /// Schema with every field at its default
    pub fn with_defaults(family: Family) -> Result<Self> {
        Self::from_partial_mapping(family, &Map::new())
    }

    /// Validate input against a field table and return the finished schema
    ///
    /// Fails with a schema error listing every required field the input
    /// omits, or a configuration error for values that are not strings.
    pub fn build(
        family: Family,
        label: &str,
        fields: &'static [FieldSpec],
        input: &Map<String, Value>,
    ) -> Result<Self> {
        let mut columns = BTreeMap::new();
        let mut missing = Vec::new();

        for field in fields {
            let supplied = if field.is_overridable() {
                string_entry(label, input, field.name)?
            } else {
                if input.contains_key(field.name) {
                    debug!(
                        "Ignoring supplied column for fixed field {}.{}",
                        label, field.name
                    );
                }
                None
            };

            match (supplied, field.default_column()) {
                (Some(column), _) => {
                    columns.insert(field.name, column.to_string());
                }
                (None, Some(default)) => {
                    columns.insert(field.name, default.to_string());
                }
                (None, None) => missing.push(field.name.to_string()),
            }
        }

        if !missing.is_empty() {
            missing.sort();
            return Err(Error::schema(label, missing));
        }

        let frequency = if family.is_time_indexed() {
            let alias = string_entry(label, input, FREQUENCY_KEY)?.unwrap_or(DEFAULT_FREQUENCY);
            let frequency = Frequency::parse(alias).map_err(|err| match err {
                Error::Configuration { message } => {
                    Error::configuration(format!("{} metadata: {}", label, message))
                }
                other => other,
            })?;
            Some(frequency)
        } else {
            None
        };

        let mut reversed = BTreeMap::new();
        for field in fields {
            let column = &columns[field.name];
            if let Some(existing) = reversed.get(column) {
                warn!(
                    "{} maps both {} and {} to column '{}'; keeping {}",
                    label, existing, field.name, column, existing
                );
                continue;
            }
            reversed.insert(column.clone(), field.name);
        }

        debug!(
            "Built {} schema with {} columns (frequency: {:?})",
            label,
            columns.len(),
            frequency.as_ref().map(Frequency::alias)
        );

        Ok(Self {
            family,
            label: label.to_string(),
            fields,
            columns,
            reversed,
            frequency,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Diagnostic label, e.g. `reanalysis.era5`
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Semantic field to actual column name
    pub fn column_map(&self) -> &BTreeMap<&'static str, String> {
        &self.columns
    }

    /// Actual column name to semantic field, for renaming loaded data
    pub fn reversed_column_map(&self) -> &BTreeMap<String, &'static str> {
        &self.reversed
    }

    /// Semantic field to expected data type
    pub fn dtype_map(&self) -> BTreeMap<&'static str, DataType> {
        self.fields
            .iter()
            .map(|field| (field.name, field.dtype))
            .collect()
    }

    /// Semantic field to physical unit (`None` for unitless fields)
    pub fn unit_map(&self) -> BTreeMap<&'static str, Option<&'static str>> {
        self.fields
            .iter()
            .map(|field| (field.name, field.unit))
            .collect()
    }

    /// Column name for a semantic field
    pub fn column(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }

    /// Semantic field for an actual column name
    pub fn semantic_field(&self, column: &str) -> Option<&'static str> {
        self.reversed.get(column).copied()
    }

    pub fn frequency(&self) -> Option<&Frequency> {
        self.frequency.as_ref()
    }

    pub fn frequency_class(&self) -> Option<FrequencyClass> {
        self.frequency.as_ref().map(Frequency::class)
    }

    /// Partial mapping that rebuilds this schema
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        for field in self.fields.iter().filter(|field| field.is_overridable()) {
            mapping.insert(
                field.name.to_string(),
                Value::String(self.columns[field.name].clone()),
            );
        }
        if let Some(frequency) = &self.frequency {
            mapping.insert(
                FREQUENCY_KEY.to_string(),
                Value::String(frequency.alias().to_string()),
            );
        }
        mapping
    }
}

/// Read a string entry from a partial mapping; `null` counts as absent
fn string_entry<'a>(
    label: &str,
    input: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(Some(value.as_str())),
        Some(Value::String(_)) => Err(Error::configuration(format!(
            "{} metadata: '{}' must not be empty",
            label, key
        ))),
        Some(other) => Err(Error::configuration(format!(
            "{} metadata: '{}' must be a string, found {}",
            label, key, other
        ))),
    }
}
