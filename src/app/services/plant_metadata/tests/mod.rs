//! Shared test utilities for plant metadata tests

use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};


/// A plant with renamed SCADA columns and two reanalysis products
pub fn sample_document() -> Value {
    json!({
        "latitude": 48.452,
        "longitude": 5.588,
        "capacity": 8.2,
        "scada": {
            "frequency": "10T",
            "asset_id": "Wind_turbine_name",
            "WTUR_W": "P_avg",
            "WMET_HorWdSpd": "Ws_avg",
            "WMET_HorWdDir": "Wa_avg",
            "WMET_EnvTmp": "Ot_avg"
        },
        "meter": {
            "MMTR_SupWh": "net_energy_kWh",
            "time": "time_utc",
            "frequency": "10T"
        },
        "curtail": {
            "IAVL_DnWh": "availability_kwh",
            "IAVL_ExtPwrDnWh": "curtailment_kwh",
            "frequency": "10T"
        },
        "asset": {
            "asset_id": "Wind_turbine_name",
            "rated_power": "Rated_power",
            "hub_height": "Hub_height_m"
        },
        "reanalysis": {
            "era5": {
                "frequency": "H",
                "time": "datetime",
                "WMETR_HorWdSpd": "ws_100m",
                "WMETR_AirDen": "dens_100m"
            },
            "merra2": {
                "frequency": "H",
                "WMETR_EnvPres": "surface_pressure"
            }
        },
        "operator": "ignored"
    })
}

/// The sample document as a top-level mapping
pub fn sample_mapping() -> Map<String, Value> {
    as_mapping(sample_document())
}

/// Convert a `json!` object literal into a mapping
pub fn as_mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("test document must be an object, got {}", other),
    }
}

/// Write a document into a test directory and return its path
pub fn write_document(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
