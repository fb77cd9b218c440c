//! Plant metadata aggregate
//!
//! [`PlantMetadata`] owns one [`FamilySchema`] per fixed dataset family, a
//! keyed collection of reanalysis product schemas, and the plant's location
//! and capacity. It is built once from a mapping or a JSON/YAML document and
//! is immutable afterwards; every derived map is computed on access.

use crate::app::models::Family;
use crate::app::services::requirements::{self, AnalysisSelection, FrequencyRequirements};
use crate::app::services::schema::FamilySchema;
use crate::constants::{
    CAPACITY_KEY, DEFAULT_PLANT_SCALAR, LATITUDE_KEY, LATITUDE_RANGE, LONGITUDE_KEY,
    LONGITUDE_RANGE, REANALYSIS_KEY,
};
use crate::{Error, Result};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub mod loader;
pub mod maps;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::{DocumentFormat, MetadataSource};
pub use maps::{ColumnMap, DtypeMap, PlantMap, UnitMap};

/// Metadata for every dataset of one wind power plant
#[derive(Debug, Clone, PartialEq)]
pub struct PlantMetadata {
    /// Plant center latitude in WGS84 degrees
    latitude: f64,

    /// Plant center longitude in WGS84 degrees
    longitude: f64,

    /// Plant capacity in MW
    capacity: f64,

    scada: FamilySchema,
    meter: FamilySchema,
    tower: FamilySchema,
    status: FamilySchema,
    curtail: FamilySchema,
    asset: FamilySchema,

    /// Reanalysis product name (era5, merra2, ...) to schema
    reanalysis: BTreeMap<String, FamilySchema>,
}

impl PlantMetadata {
    /// Build plant metadata from a top-level mapping
    ///
    /// Every fixed family is built from its sub-mapping, or from defaults when
    /// absent. `reanalysis` maps product names to sub-mappings and may be
    /// absent. Unrecognized top-level keys are ignored.
    pub fn from_mapping(input: &Map<String, Value>) -> Result<Self> {
        let latitude = scalar_entry(input, LATITUDE_KEY)?;
        let longitude = scalar_entry(input, LONGITUDE_KEY)?;
        let capacity = scalar_entry(input, CAPACITY_KEY)?;
        check_range(LATITUDE_KEY, latitude, LATITUDE_RANGE)?;
        check_range(LONGITUDE_KEY, longitude, LONGITUDE_RANGE)?;
        if capacity < 0.0 {
            return Err(Error::configuration(format!(
                "Invalid {} {}: must not be negative",
                CAPACITY_KEY, capacity
            )));
        }

        let fixed = |family: Family| -> Result<FamilySchema> {
            FamilySchema::from_partial_mapping(family, &family_entry(input, family.as_str())?)
        };

        let mut reanalysis = BTreeMap::new();
        for (product, sub_mapping) in family_entry(input, REANALYSIS_KEY)? {
            let key = format!("{}.{}", REANALYSIS_KEY, product);
            let sub_mapping = mapping_value(&key, sub_mapping)?;
            let schema = FamilySchema::reanalysis_product(&product, &sub_mapping)?;
            reanalysis.insert(product, schema);
        }

        let metadata = Self {
            latitude,
            longitude,
            capacity,
            scada: fixed(Family::Scada)?,
            meter: fixed(Family::Meter)?,
            tower: fixed(Family::Tower)?,
            status: fixed(Family::Status)?,
            curtail: fixed(Family::Curtail)?,
            asset: fixed(Family::Asset)?,
            reanalysis,
        };

        debug!(
            "Built plant metadata at ({}, {}) with {} reanalysis products",
            metadata.latitude,
            metadata.longitude,
            metadata.reanalysis.len()
        );
        Ok(metadata)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Plant capacity in MW
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// The plant's (latitude, longitude) pair
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Schema of a fixed family; `None` for reanalysis, which is keyed by product
    pub fn schema(&self, family: Family) -> Option<&FamilySchema> {
        match family {
            Family::Scada => Some(&self.scada),
            Family::Meter => Some(&self.meter),
            Family::Tower => Some(&self.tower),
            Family::Status => Some(&self.status),
            Family::Curtail => Some(&self.curtail),
            Family::Asset => Some(&self.asset),
            Family::Reanalysis => None,
        }
    }

    /// Reanalysis product schemas by product name
    pub fn reanalysis(&self) -> &BTreeMap<String, FamilySchema> {
        &self.reanalysis
    }

    /// Every schema of a family: one for fixed families, one per product for reanalysis
    pub fn schemas(&self, family: Family) -> Vec<&FamilySchema> {
        match self.schema(family) {
            Some(schema) => vec![schema],
            None => self.reanalysis.values().collect(),
        }
    }

    /// Apply `f` to every schema, keeping the plant layout
    pub fn map_schemas<T>(&self, f: impl Fn(&FamilySchema) -> T) -> PlantMap<T> {
        PlantMap {
            scada: f(&self.scada),
            meter: f(&self.meter),
            tower: f(&self.tower),
            status: f(&self.status),
            curtail: f(&self.curtail),
            asset: f(&self.asset),
            reanalysis: self
                .reanalysis
                .iter()
                .map(|(product, schema)| (product.clone(), f(schema)))
                .collect(),
        }
    }

    /// Column mapping of every family
    pub fn column_map(&self) -> ColumnMap {
        self.map_schemas(|schema| schema.column_map().clone())
    }

    /// Expected data types of every family
    pub fn dtype_map(&self) -> DtypeMap {
        self.map_schemas(FamilySchema::dtype_map)
    }

    /// Physical units of every family
    pub fn unit_map(&self) -> UnitMap {
        self.map_schemas(FamilySchema::unit_map)
    }

    /// Accepted frequency classes per family for the named analyses
    ///
    /// Same intersection as [`requirements::resolve_frequency`]; families
    /// present with an empty set cannot satisfy every analysis at once.
    pub fn frequency_requirements<S: AsRef<str>>(
        &self,
        analyses: &[S],
    ) -> Result<FrequencyRequirements> {
        let selection = AnalysisSelection::parse(analyses)?;
        Ok(requirements::frequencies_for(&selection))
    }

    /// Check the configured sampling frequencies against the named analyses
    ///
    /// Returns the resolved requirements when every family touched by the
    /// analyses is sampled at an accepted frequency.
    pub fn validate_frequencies<S: AsRef<str>>(
        &self,
        analyses: &[S],
    ) -> Result<FrequencyRequirements> {
        let selection = AnalysisSelection::parse(analyses)?;
        let frequencies = requirements::frequencies_for(&selection);
        self.check_frequencies(&frequencies, &selection.names())?;

        info!(
            "Sampling frequencies satisfy {}",
            selection.names().join(", ")
        );
        Ok(frequencies)
    }

    /// Check the configured sampling frequencies against resolved requirements
    ///
    /// `analyses` only names the requesting analyses in diagnostics. Families
    /// without a time index carry no frequency and are never checked.
    pub fn check_frequencies(
        &self,
        frequencies: &FrequencyRequirements,
        analyses: &[String],
    ) -> Result<()> {
        for (family, accepted) in frequencies {
            if accepted.is_empty() {
                return Err(Error::frequency_conflict(family.as_str(), analyses.to_vec()));
            }

            let schemas = self.schemas(*family);
            if schemas.is_empty() {
                warn!(
                    "{} requires {} data but the plant has none configured",
                    analyses.join(", "),
                    family
                );
            }

            for schema in schemas {
                let Some(frequency) = schema.frequency() else {
                    continue;
                };
                if !accepted.contains(&frequency.class()) {
                    return Err(Error::frequency_mismatch(
                        schema.label(),
                        frequency.alias(),
                        accepted.iter().map(|class| class.to_string()).collect(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Top-level mapping that rebuilds this metadata
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(LATITUDE_KEY.to_string(), number(self.latitude));
        mapping.insert(LONGITUDE_KEY.to_string(), number(self.longitude));
        mapping.insert(CAPACITY_KEY.to_string(), number(self.capacity));

        for (family, schema) in self.map_schemas(FamilySchema::to_mapping).iter_fixed() {
            mapping.insert(family.as_str().to_string(), Value::Object(schema.clone()));
        }

        let reanalysis: Map<String, Value> = self
            .reanalysis
            .iter()
            .map(|(product, schema)| (product.clone(), Value::Object(schema.to_mapping())))
            .collect();
        mapping.insert(REANALYSIS_KEY.to_string(), Value::Object(reanalysis));
        mapping
    }
}

/// Plant scalar coerced from a number or numeric string; absent means zero
///
/// Non-finite values are rejected since documents cannot represent them.
fn scalar_entry(input: &Map<String, Value>, key: &str) -> Result<f64> {
    let value = match input.get(key) {
        None | Some(Value::Null) => return Ok(DEFAULT_PLANT_SCALAR),
        Some(Value::Number(value)) => value.as_f64(),
        Some(Value::String(text)) => {
            let parsed = text.trim().parse::<f64>().map_err(|_| {
                Error::configuration(format!("'{}' must be numeric, found '{}'", key, text))
            })?;
            Some(parsed)
        }
        Some(other) => {
            return Err(Error::configuration(format!(
                "'{}' must be numeric, found {}",
                key, other
            )));
        }
    };

    value
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::configuration(format!("'{}' is not a finite number", key)))
}

fn check_range(key: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Error::configuration(format!(
            "Invalid {} {}: must be between {} and {} degrees",
            key, value, min, max
        )));
    }
    Ok(())
}

/// Sub-mapping stored under `key`; absent or null means empty
fn family_entry(input: &Map<String, Value>, key: &str) -> Result<Map<String, Value>> {
    match input.get(key) {
        None => Ok(Map::new()),
        Some(value) => mapping_value(key, value.clone()),
    }
}

fn mapping_value(key: &str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map),
        other => Err(Error::configuration(format!(
            "'{}' must be a mapping, found {}",
            key, other
        ))),
    }
}

fn number(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}
