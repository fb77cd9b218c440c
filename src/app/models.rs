//! Data models for plant metadata
//!
//! This module contains the closed vocabularies shared by the schema,
//! requirement and aggregate services: dataset families, sampling frequency
//! classes, column data types, analysis names and conditional flags.

use crate::constants::ALL_ANALYSES;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Dataset Families
// =============================================================================

/// Category of operational dataset
///
/// The six fixed families always exist on a plant; `Reanalysis` stands for
/// every reanalysis product (era5, merra2, ...), each with its own schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Scada,
    Meter,
    Tower,
    Status,
    Curtail,
    Asset,
    Reanalysis,
}

impl Family {
    /// Families owned exactly once by every plant
    pub const FIXED: [Family; 6] = [
        Family::Scada,
        Family::Meter,
        Family::Tower,
        Family::Status,
        Family::Curtail,
        Family::Asset,
    ];

    /// Every family, fixed ones first
    pub const ALL: [Family; 7] = [
        Family::Scada,
        Family::Meter,
        Family::Tower,
        Family::Status,
        Family::Curtail,
        Family::Asset,
        Family::Reanalysis,
    ];

    /// Document key for this family
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Scada => "scada",
            Family::Meter => "meter",
            Family::Tower => "tower",
            Family::Status => "status",
            Family::Curtail => "curtail",
            Family::Asset => "asset",
            Family::Reanalysis => "reanalysis",
        }
    }

    /// Whether this family carries a timestamp column and sampling frequency
    pub fn is_time_indexed(&self) -> bool {
        !matches!(self, Family::Asset)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Family::ALL
            .into_iter()
            .find(|family| family.as_str() == s.trim())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown data family '{}': expected one of scada, meter, tower, status, curtail, asset, reanalysis",
                    s
                ))
            })
    }
}

// =============================================================================
// Sampling Frequency Classes
// =============================================================================

/// Sampling cadence bucket, ordered from coarse to fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyClass {
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minute,
    Second,
    SubSecond,
}

impl FrequencyClass {
    /// Every class, coarse to fine
    pub const ALL: [FrequencyClass; 7] = [
        FrequencyClass::Monthly,
        FrequencyClass::Weekly,
        FrequencyClass::Daily,
        FrequencyClass::Hourly,
        FrequencyClass::Minute,
        FrequencyClass::Second,
        FrequencyClass::SubSecond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyClass::Monthly => "monthly",
            FrequencyClass::Weekly => "weekly",
            FrequencyClass::Daily => "daily",
            FrequencyClass::Hourly => "hourly",
            FrequencyClass::Minute => "minute",
            FrequencyClass::Second => "second",
            FrequencyClass::SubSecond => "sub-second",
        }
    }

    /// The accepted set for "at least as fine as `self`"
    pub fn at_least(self) -> BTreeSet<FrequencyClass> {
        FrequencyClass::ALL
            .into_iter()
            .filter(|class| *class >= self)
            .collect()
    }

    /// The universal set, used as the unconstrained starting point of an intersection
    pub fn universal() -> BTreeSet<FrequencyClass> {
        FrequencyClass::ALL.into_iter().collect()
    }
}

impl fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FrequencyClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s.trim())
            .ok_or_else(|| Error::configuration(format!("Unknown frequency class '{}'", s)))
    }
}

// =============================================================================
// Column Data Types
// =============================================================================

/// Expected data type of a column, as handed to data-loading code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Nanosecond-resolution timestamps
    Datetime,
    String,
    Float,
    Integer,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Datetime => "datetime",
            DataType::String => "string",
            DataType::Float => "float",
            DataType::Integer => "integer",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Analyses and Conditional Flags
// =============================================================================

/// Operational analyses with catalogued data requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnalysisType {
    #[serde(rename = "MonteCarloAEP")]
    MonteCarloAep,
    TurbineLongTermGrossEnergy,
    ElectricalLosses,
    WakeLosses,
}

impl AnalysisType {
    /// Every catalogued analysis
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::MonteCarloAep,
        AnalysisType::TurbineLongTermGrossEnergy,
        AnalysisType::ElectricalLosses,
        AnalysisType::WakeLosses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::MonteCarloAep => "MonteCarloAEP",
            AnalysisType::TurbineLongTermGrossEnergy => "TurbineLongTermGrossEnergy",
            AnalysisType::ElectricalLosses => "ElectricalLosses",
            AnalysisType::WakeLosses => "WakeLosses",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        AnalysisType::ALL
            .into_iter()
            .find(|analysis| analysis.as_str() == name)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown analysis type '{}': expected one of {} or '{}'",
                    name,
                    crate::constants::ANALYSIS_NAMES.join(", "),
                    ALL_ANALYSES
                ))
            })
    }
}

/// Optional analysis configuration that makes extra columns mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalFlag {
    /// Regression on reanalysis temperature
    RegTemperature,
    /// Regression on reanalysis wind direction components
    RegWindDirection,
}

impl ConditionalFlag {
    pub const ALL: [ConditionalFlag; 2] =
        [ConditionalFlag::RegTemperature, ConditionalFlag::RegWindDirection];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionalFlag::RegTemperature => "reg_temperature",
            ConditionalFlag::RegWindDirection => "reg_wind_direction",
        }
    }
}

impl fmt::Display for ConditionalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionalFlag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConditionalFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s.trim())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown conditional option '{}': expected one of {}",
                    s,
                    crate::constants::CONDITIONAL_FLAG_NAMES.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_classes_are_ordered_coarse_to_fine() {
        assert!(FrequencyClass::Monthly < FrequencyClass::Weekly);
        assert!(FrequencyClass::Hourly < FrequencyClass::Minute);
        assert!(FrequencyClass::Second < FrequencyClass::SubSecond);
    }

    #[test]
    fn test_at_least_includes_class_and_everything_finer() {
        let daily = FrequencyClass::Daily.at_least();
        assert_eq!(daily.len(), 5);
        assert!(daily.contains(&FrequencyClass::Daily));
        assert!(daily.contains(&FrequencyClass::SubSecond));
        assert!(!daily.contains(&FrequencyClass::Weekly));

        assert_eq!(FrequencyClass::Monthly.at_least(), FrequencyClass::universal());
        assert_eq!(FrequencyClass::SubSecond.at_least().len(), 1);
    }

    #[test]
    fn test_analysis_type_parsing() {
        assert_eq!(
            "MonteCarloAEP".parse::<AnalysisType>().unwrap(),
            AnalysisType::MonteCarloAep
        );
        assert_eq!(
            " WakeLosses ".parse::<AnalysisType>().unwrap(),
            AnalysisType::WakeLosses
        );

        let err = "YawMisalignment".parse::<AnalysisType>().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("YawMisalignment"));
    }

    #[test]
    fn test_family_round_trip_through_names() {
        for family in Family::ALL {
            assert_eq!(family.as_str().parse::<Family>().unwrap(), family);
        }
        assert!("turbine".parse::<Family>().is_err());
        assert!(!Family::Asset.is_time_indexed());
        assert!(Family::Reanalysis.is_time_indexed());
    }

    #[test]
    fn test_conditional_flag_parsing() {
        assert_eq!(
            "reg_temperature".parse::<ConditionalFlag>().unwrap(),
            ConditionalFlag::RegTemperature
        );
        let err = "reg_humidity".parse::<ConditionalFlag>().unwrap_err();
        assert!(err.to_string().contains("reg_humidity"));
    }

    #[test]
    fn test_serde_names_match_document_names() {
        assert_eq!(
            serde_json::to_string(&FrequencyClass::SubSecond).unwrap(),
            "\"sub-second\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisType::MonteCarloAep).unwrap(),
            "\"MonteCarloAEP\""
        );
        assert_eq!(serde_json::to_string(&Family::Curtail).unwrap(), "\"curtail\"");
    }
}
