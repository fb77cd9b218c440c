//! Shared test utilities for family schema tests

use serde_json::{Map, Value};

pub mod family_schema_tests;

/// Convert a `json!` object literal into a partial mapping
pub fn mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("test mapping must be an object, got {}", other),
    }
}
