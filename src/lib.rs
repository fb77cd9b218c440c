//! Plant Metadata Library
//!
//! A Rust library describing the operational datasets of a wind power plant
//! and the data each performance analysis needs from them.
//!
//! This library provides tools for:
//! - Mapping semantic fields (e.g. `WTUR_W`) to the actual column names used by a plant
//! - Fixed data types and physical units for every semantic field
//! - Loading and saving plant metadata documents in JSON or YAML
//! - Resolving the columns and sampling frequencies required by a set of analyses
//! - Checking a plant's configured sampling frequencies against those requirements

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod model_fitting;
        pub mod plant_metadata;
        pub mod requirements;
        pub mod schema;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnalysisType, ConditionalFlag, DataType, Family, FrequencyClass};
pub use app::services::plant_metadata::{MetadataSource, PlantMetadata};
pub use app::services::requirements::{
    AnalysisSelection, ColumnRequirements, FrequencyRequirements, resolve_both, resolve_columns,
    resolve_frequency,
};
pub use app::services::schema::FamilySchema;

/// Result type alias for plant metadata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for metadata construction, loading and requirement resolution
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid caller-supplied identifier or structure
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Required schema fields were not supplied
    #[error("Schema error in {family} metadata: missing required fields {missing:?}")]
    Schema { family: String, missing: Vec<String> },

    /// Metadata document does not exist
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// No sampling frequency satisfies every requested analysis
    #[error(
        "Frequency conflict for {family}: no sampling frequency satisfies all of {analyses:?}"
    )]
    FrequencyConflict {
        family: String,
        analyses: Vec<String>,
    },

    /// Configured sampling frequency is not accepted by the requested analyses
    #[error("Frequency mismatch for {family}: '{frequency}' is not one of {accepted:?}")]
    FrequencyMismatch {
        family: String,
        frequency: String,
        accepted: Vec<String>,
    },

    /// JSON document could not be parsed or written
    #[error("JSON error in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML document could not be parsed or written
    #[error("YAML error in '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a schema error listing every missing field
    pub fn schema(family: impl Into<String>, missing: Vec<String>) -> Self {
        Self::Schema {
            family: family.into(),
            missing,
        }
    }

    /// Create a file not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a frequency conflict error
    pub fn frequency_conflict(family: impl Into<String>, analyses: Vec<String>) -> Self {
        Self::FrequencyConflict {
            family: family.into(),
            analyses,
        }
    }

    /// Create a frequency mismatch error
    pub fn frequency_mismatch(
        family: impl Into<String>,
        frequency: impl Into<String>,
        accepted: Vec<String>,
    ) -> Self {
        Self::FrequencyMismatch {
            family: family.into(),
            frequency: frequency.into(),
            accepted,
        }
    }

    /// Create a JSON error for a document path
    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create a YAML error for a document path
    pub fn yaml(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a caller configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
