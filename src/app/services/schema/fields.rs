//! Semantic field tables for each data family
//!
//! Every family lists its semantic fields explicitly, together with how the
//! column name is obtained (defaulted, required, or fixed), the data type and
//! the physical unit handed to downstream code. Types and units are part of
//! the table and can never be overridden by a plant.

use crate::app::models::{DataType, Family};

/// How a field's column name is resolved during schema construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Caller may override; falls back to the given column name
    Defaulted(&'static str),
    /// Caller must supply the column name
    Required,
    /// Always the given column name; caller input is ignored
    Fixed(&'static str),
}

/// One semantic field of a family schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub dtype: DataType,
    pub unit: Option<&'static str>,
}

impl FieldSpec {
    /// Overridable field whose default column name is the field name
    pub const fn defaulted(
        name: &'static str,
        dtype: DataType,
        unit: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Defaulted(name),
            dtype,
            unit,
        }
    }

    /// Overridable field with a default column name different from the field name
    pub const fn defaulted_as(
        name: &'static str,
        default: &'static str,
        dtype: DataType,
        unit: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Defaulted(default),
            dtype,
            unit,
        }
    }

    /// Field without a default that every input must provide
    pub const fn required(name: &'static str, dtype: DataType, unit: Option<&'static str>) -> Self {
        Self {
            name,
            kind: FieldKind::Required,
            dtype,
            unit,
        }
    }

    /// Field computed downstream under a fixed column name
    pub const fn fixed(name: &'static str, dtype: DataType, unit: Option<&'static str>) -> Self {
        Self {
            name,
            kind: FieldKind::Fixed(name),
            dtype,
            unit,
        }
    }

    /// Whether caller input may change this field's column name
    pub fn is_overridable(&self) -> bool {
        !matches!(self.kind, FieldKind::Fixed(_))
    }

    /// Column name used when the caller does not supply one
    pub fn default_column(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Defaulted(column) | FieldKind::Fixed(column) => Some(column),
            FieldKind::Required => None,
        }
    }
}

// =============================================================================
// Shared Fields
// =============================================================================

const TIME: FieldSpec = FieldSpec::defaulted("time", DataType::Datetime, Some("datetime64[ns]"));
const ASSET_ID: FieldSpec = FieldSpec::defaulted("asset_id", DataType::String, None);

// =============================================================================
// Family Tables
// =============================================================================

/// Turbine SCADA data
pub const SCADA_FIELDS: &[FieldSpec] = &[
    TIME,
    ASSET_ID,
    FieldSpec::defaulted("WTUR_W", DataType::Float, Some("kW")),
    FieldSpec::defaulted("WMET_HorWdSpd", DataType::Float, Some("m/s")),
    FieldSpec::defaulted("WMET_HorWdDir", DataType::Float, Some("deg")),
    FieldSpec::defaulted("WTUR_TurSt", DataType::String, None),
    FieldSpec::defaulted("WROT_BlPthAngVal", DataType::Float, Some("deg")),
    FieldSpec::defaulted("WMET_EnvTmp", DataType::Float, Some("C")),
    // Energy is derived from power after loading
    FieldSpec::fixed("WTUR_SupWh", DataType::Float, Some("kWh")),
];

/// Revenue meter data
pub const METER_FIELDS: &[FieldSpec] = &[
    TIME,
    FieldSpec::defaulted("MMTR_SupWh", DataType::Float, Some("kWh")),
];

/// Meteorological tower data
pub const TOWER_FIELDS: &[FieldSpec] = &[TIME, ASSET_ID];

/// Turbine status log data
pub const STATUS_FIELDS: &[FieldSpec] = &[
    TIME,
    ASSET_ID,
    FieldSpec::defaulted("status_id", DataType::Integer, None),
    FieldSpec::defaulted("status_code", DataType::Integer, None),
    FieldSpec::defaulted("status_text", DataType::String, None),
];

/// Plant curtailment and availability data
pub const CURTAIL_FIELDS: &[FieldSpec] = &[
    TIME,
    FieldSpec::defaulted("IAVL_ExtPwrDnWh", DataType::Float, Some("kWh")),
    FieldSpec::defaulted("IAVL_DnWh", DataType::Float, Some("kWh")),
];

/// Static asset attributes (turbines and met towers)
pub const ASSET_FIELDS: &[FieldSpec] = &[
    ASSET_ID,
    FieldSpec::defaulted("latitude", DataType::Float, Some("WGS84")),
    FieldSpec::defaulted("longitude", DataType::Float, Some("WGS84")),
    FieldSpec::defaulted("rated_power", DataType::Float, Some("kW")),
    FieldSpec::defaulted("hub_height", DataType::Float, Some("m")),
    FieldSpec::defaulted("rotor_diameter", DataType::Float, Some("m")),
    FieldSpec::defaulted("elevation", DataType::Float, Some("m")),
    FieldSpec::defaulted("type", DataType::String, None),
];

/// A single reanalysis product
pub const REANALYSIS_FIELDS: &[FieldSpec] = &[
    TIME,
    FieldSpec::defaulted("WMETR_HorWdSpd", DataType::Float, Some("m/s")),
    FieldSpec::defaulted("WMETR_HorWdSpdU", DataType::Float, Some("m/s")),
    FieldSpec::defaulted("WMETR_HorWdSpdV", DataType::Float, Some("m/s")),
    FieldSpec::defaulted("WMETR_HorWdDir", DataType::Float, Some("deg")),
    FieldSpec::defaulted("WMETR_EnvTmp", DataType::Float, Some("K")),
    FieldSpec::defaulted("WMETR_AirDen", DataType::Float, Some("kg/m^3")),
    FieldSpec::defaulted_as(
        "WMETR_EnvPres",
        "surface_pressure",
        DataType::Float,
        Some("Pa"),
    ),
];

/// Field table for a family
pub fn fields_for(family: Family) -> &'static [FieldSpec] {
    match family {
        Family::Scada => SCADA_FIELDS,
        Family::Meter => METER_FIELDS,
        Family::Tower => TOWER_FIELDS,
        Family::Status => STATUS_FIELDS,
        Family::Curtail => CURTAIL_FIELDS,
        Family::Asset => ASSET_FIELDS,
        Family::Reanalysis => REANALYSIS_FIELDS,
    }
}
