//! Application constants for the plant metadata library
//!
//! This module contains the document keys, default values, and frequency
//! alias tables used throughout the library.

// =============================================================================
// Analysis Names
// =============================================================================

/// Supported analysis names, as accepted on the command line and in documents
pub const ANALYSIS_NAMES: &[&str] = &[
    "MonteCarloAEP",
    "TurbineLongTermGrossEnergy",
    "ElectricalLosses",
    "WakeLosses",
];

/// Wildcard selecting every analysis in the catalog
pub const ALL_ANALYSES: &str = "all";

/// Conditional configuration flags understood by the catalog
pub const CONDITIONAL_FLAG_NAMES: &[&str] = &["reg_temperature", "reg_wind_direction"];

// =============================================================================
// Document Keys
// =============================================================================

/// Top-level key for the plant latitude (WGS84 degrees)
pub const LATITUDE_KEY: &str = "latitude";

/// Top-level key for the plant longitude (WGS84 degrees)
pub const LONGITUDE_KEY: &str = "longitude";

/// Top-level key for the plant capacity (MW)
pub const CAPACITY_KEY: &str = "capacity";

/// Top-level key holding the reanalysis products
pub const REANALYSIS_KEY: &str = "reanalysis";

/// Per-family key for the configured sampling frequency
pub const FREQUENCY_KEY: &str = "frequency";

// =============================================================================
// Defaults and Bounds
// =============================================================================

/// Default sampling frequency for time-indexed families (ten minutes)
pub const DEFAULT_FREQUENCY: &str = "10T";

/// Default plant latitude, longitude and capacity
pub const DEFAULT_PLANT_SCALAR: f64 = 0.0;

/// Valid latitude range in WGS84 degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in WGS84 degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

// =============================================================================
// Document Formats
// =============================================================================

/// File extensions parsed as JSON
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// File extensions parsed as YAML
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

// =============================================================================
// Frequency Aliases
// =============================================================================

/// Pandas-style offset alias codes grouped by sampling cadence class
///
/// Multipliers (`10T`) and anchors (`W-SUN`) are stripped before lookup, so
/// only the bare code appears here.
pub mod frequency_aliases {
    /// Month start/end codes
    pub const MONTHLY: &[&str] = &["M", "MS", "ME", "BM", "BMS", "BME"];

    /// Week codes
    pub const WEEKLY: &[&str] = &["W"];

    /// Calendar and business day codes
    pub const DAILY: &[&str] = &["D", "B"];

    /// Hour codes
    pub const HOURLY: &[&str] = &["H", "h", "BH"];

    /// Minute codes
    pub const MINUTE: &[&str] = &["T", "min"];

    /// Second codes
    pub const SECOND: &[&str] = &["S", "s"];

    /// Milli-, micro- and nanosecond codes
    pub const SUB_SECOND: &[&str] = &["L", "ms", "U", "us", "N", "ns"];
}

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used for the default log filter
pub const LOG_TARGET: &str = "plant_metadata";
