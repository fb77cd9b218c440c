//! Loading and saving plant metadata documents
//!
//! Metadata arrives as an already-built [`PlantMetadata`], an in-memory
//! mapping, or a path to a JSON or YAML document. The document format is
//! chosen by file extension.

use super::PlantMetadata;
use crate::constants::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Any of the accepted ways to provide plant metadata
#[derive(Debug, Clone)]
pub enum MetadataSource {
    /// Already-built metadata, returned as-is
    Metadata(PlantMetadata),
    /// Top-level mapping, e.g. a parsed document
    Mapping(Value),
    /// Path to a `.json`, `.yaml` or `.yml` document
    Path(PathBuf),
}

impl From<PlantMetadata> for MetadataSource {
    fn from(metadata: PlantMetadata) -> Self {
        MetadataSource::Metadata(metadata)
    }
}

impl From<Value> for MetadataSource {
    fn from(value: Value) -> Self {
        MetadataSource::Mapping(value)
    }
}

impl From<Map<String, Value>> for MetadataSource {
    fn from(mapping: Map<String, Value>) -> Self {
        MetadataSource::Mapping(Value::Object(mapping))
    }
}

impl From<PathBuf> for MetadataSource {
    fn from(path: PathBuf) -> Self {
        MetadataSource::Path(path)
    }
}

impl From<&Path> for MetadataSource {
    fn from(path: &Path) -> Self {
        MetadataSource::Path(path.to_path_buf())
    }
}

impl From<&str> for MetadataSource {
    fn from(path: &str) -> Self {
        MetadataSource::Path(PathBuf::from(path))
    }
}

/// Serialization format of a metadata document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Format implied by a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Ok(DocumentFormat::Json)
        } else if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Ok(DocumentFormat::Yaml)
        } else {
            Err(Error::configuration(format!(
                "Unsupported metadata file '{}': expected one of .json, .yaml, .yml",
                path.display()
            )))
        }
    }
}

impl PlantMetadata {
    /// Load metadata from any accepted source
    ///
    /// Loading the same source twice yields equal metadata.
    pub fn load(source: impl Into<MetadataSource>) -> Result<Self> {
        match source.into() {
            MetadataSource::Metadata(metadata) => Ok(metadata),
            MetadataSource::Mapping(value) => Self::from_value(&value),
            MetadataSource::Path(path) => Self::from_file(&path),
        }
    }

    /// Build metadata from a parsed document, which must be a mapping
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(mapping) => Self::from_mapping(mapping),
            other => Err(Error::configuration(format!(
                "Plant metadata must be a mapping at the top level, found {}",
                value_kind(other)
            ))),
        }
    }

    /// Read and parse a JSON or YAML metadata document
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        if !path.is_file() {
            return Err(Error::not_found(path.display().to_string()));
        }

        info!("Loading plant metadata from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read metadata file {}", path.display()), e)
        })?;

        let value: Value = match format {
            DocumentFormat::Json => serde_json::from_str(&contents)
                .map_err(|e| Error::json(path.display().to_string(), e))?,
            DocumentFormat::Yaml => serde_yaml::from_str(&contents)
                .map_err(|e| Error::yaml(path.display().to_string(), e))?,
        };

        debug!("Parsed {:?} metadata document {}", format, path.display());
        Self::from_value(&value)
    }

    /// Write metadata to a JSON or YAML document that loads back to equal metadata
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;
        let document = Value::Object(self.to_mapping());

        let contents = match format {
            DocumentFormat::Json => serde_json::to_string_pretty(&document)
                .map_err(|e| Error::json(path.display().to_string(), e))?,
            DocumentFormat::Yaml => serde_yaml::to_string(&document)
                .map_err(|e| Error::yaml(path.display().to_string(), e))?,
        };

        fs::write(path, contents).map_err(|e| {
            Error::io(format!("Failed to write metadata file {}", path.display()), e)
        })?;

        info!("Saved plant metadata to {}", path.display());
        Ok(())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
