//! Tests for family schema construction and derived maps

use super::*;
use crate::Error;
use crate::app::models::{DataType, Family, FrequencyClass};
use crate::app::services::schema::{FamilySchema, FieldSpec, fields_for};
use serde_json::json;

static FIELDS_WITH_REQUIRED: &[FieldSpec] = &[
    FieldSpec::defaulted("time", DataType::Datetime, Some("datetime64[ns]")),
    FieldSpec::required("power", DataType::Float, Some("kW")),
    FieldSpec::required("energy", DataType::Float, Some("kWh")),
];

#[test]
fn test_empty_mapping_uses_defaults() {
    for family in Family::ALL {
        let schema = FamilySchema::with_defaults(family).unwrap();

        for field in fields_for(family) {
            assert_eq!(
                schema.column(field.name),
                field.default_column(),
                "{}.{}",
                family,
                field.name
            );
        }
        assert_eq!(schema.column_map().len(), fields_for(family).len());
    }
}

#[test]
fn test_default_frequency_is_ten_minutes() {
    let schema = FamilySchema::with_defaults(Family::Scada).unwrap();
    let frequency = schema.frequency().unwrap();
    assert_eq!(frequency.alias(), "10T");
    assert_eq!(schema.frequency_class(), Some(FrequencyClass::Minute));

    let asset = FamilySchema::with_defaults(Family::Asset).unwrap();
    assert!(asset.frequency().is_none());
}

#[test]
fn test_single_override_changes_only_that_field() {
    let defaults = FamilySchema::with_defaults(Family::Scada).unwrap();
    let schema =
        FamilySchema::from_partial_mapping(Family::Scada, &mapping(json!({"WTUR_W": "power_kw"})))
            .unwrap();

    for (field, column) in schema.column_map() {
        if *field == "WTUR_W" {
            assert_eq!(column, "power_kw");
        } else {
            assert_eq!(Some(column.as_str()), defaults.column(field));
        }
    }
}

#[test]
fn test_unrecognized_keys_are_ignored() {
    let input = mapping(json!({
        "MMTR_SupWh": "net_energy",
        "WTUR_W": "belongs_to_scada",
        "latitude": 48.45,
    }));
    let schema = FamilySchema::from_partial_mapping(Family::Meter, &input).unwrap();

    assert_eq!(schema.column("MMTR_SupWh"), Some("net_energy"));
    assert_eq!(schema.column("WTUR_W"), None);
    assert_eq!(schema.column_map().len(), 2);
}

#[test]
fn test_fixed_fields_ignore_input() {
    let input = mapping(json!({"WTUR_SupWh": "energy_kwh"}));
    let schema = FamilySchema::from_partial_mapping(Family::Scada, &input).unwrap();
    assert_eq!(schema.column("WTUR_SupWh"), Some("WTUR_SupWh"));
}

#[test]
fn test_missing_required_field_names_exactly_that_field() {
    let input = mapping(json!({"energy": "kwh_total"}));
    let err = FamilySchema::build(Family::Meter, "meter", FIELDS_WITH_REQUIRED, &input)
        .unwrap_err();

    match err {
        Error::Schema { family, missing } => {
            assert_eq!(family, "meter");
            assert_eq!(missing, vec!["power".to_string()]);
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_missing_required_fields_are_all_reported() {
    let err = FamilySchema::build(
        Family::Meter,
        "meter",
        FIELDS_WITH_REQUIRED,
        &mapping(json!({})),
    )
    .unwrap_err();

    assert!(matches!(
        &err,
        Error::Schema { missing, .. } if missing == &vec!["energy".to_string(), "power".to_string()]
    ));
    assert!(err.to_string().contains("energy"));
    assert!(err.to_string().contains("power"));
}

#[test]
fn test_required_fields_satisfied() {
    let input = mapping(json!({"power": "p", "energy": "e"}));
    let schema = FamilySchema::build(Family::Meter, "meter", FIELDS_WITH_REQUIRED, &input).unwrap();
    assert_eq!(schema.column("power"), Some("p"));
    assert_eq!(schema.column("time"), Some("time"));
}

#[test]
fn test_non_string_column_is_rejected() {
    let input = mapping(json!({"asset_id": 7}));
    let err = FamilySchema::from_partial_mapping(Family::Tower, &input).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("asset_id"));
    assert!(err.to_string().contains("tower"));
}

#[test]
fn test_null_column_falls_back_to_default() {
    let input = mapping(json!({"asset_id": null}));
    let schema = FamilySchema::from_partial_mapping(Family::Tower, &input).unwrap();
    assert_eq!(schema.column("asset_id"), Some("asset_id"));
}

#[test]
fn test_invalid_frequency_is_rejected() {
    let input = mapping(json!({"frequency": "fortnightly"}));
    let err = FamilySchema::from_partial_mapping(Family::Curtail, &input).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("curtail"));
}

#[test]
fn test_frequency_key_ignored_for_asset() {
    let input = mapping(json!({"frequency": "fortnightly"}));
    let schema = FamilySchema::from_partial_mapping(Family::Asset, &input).unwrap();
    assert!(schema.frequency().is_none());
}

#[test]
fn test_type_and_unit_maps_cover_column_map() {
    for family in Family::ALL {
        let schema = FamilySchema::with_defaults(family).unwrap();
        let dtypes = schema.dtype_map();
        let units = schema.unit_map();

        for field in dtypes.keys().chain(units.keys()) {
            assert!(schema.column_map().contains_key(field), "{}.{}", family, field);
        }
        assert_eq!(dtypes.len(), schema.column_map().len());
    }
}

#[test]
fn test_scada_types_and_units() {
    let schema = FamilySchema::with_defaults(Family::Scada).unwrap();
    let dtypes = schema.dtype_map();
    let units = schema.unit_map();

    assert_eq!(dtypes["time"], DataType::Datetime);
    assert_eq!(dtypes["asset_id"], DataType::String);
    assert_eq!(dtypes["WTUR_W"], DataType::Float);
    assert_eq!(units["WTUR_W"], Some("kW"));
    assert_eq!(units["WMET_EnvTmp"], Some("C"));
    assert_eq!(units["WTUR_SupWh"], Some("kWh"));
    assert_eq!(units["asset_id"], None);
}

#[test]
fn test_reversed_map_supports_renaming() {
    let input = mapping(json!({"time": "Timestamp", "asset_id": "Turbine"}));
    let schema = FamilySchema::from_partial_mapping(Family::Status, &input).unwrap();

    assert_eq!(schema.semantic_field("Timestamp"), Some("time"));
    assert_eq!(schema.semantic_field("Turbine"), Some("asset_id"));
    assert_eq!(schema.semantic_field("status_code"), Some("status_code"));
    assert_eq!(schema.semantic_field("time"), None);
    assert_eq!(
        schema.reversed_column_map().len(),
        schema.column_map().len()
    );
}

#[test]
fn test_reanalysis_product_defaults_and_label() {
    let schema = FamilySchema::reanalysis_product("era5", &mapping(json!({}))).unwrap();
    assert_eq!(schema.family(), Family::Reanalysis);
    assert_eq!(schema.label(), "reanalysis.era5");
    assert_eq!(schema.column("WMETR_EnvPres"), Some("surface_pressure"));
    assert_eq!(schema.unit_map()["WMETR_EnvTmp"], Some("K"));
}

#[test]
fn test_to_mapping_rebuilds_schema() {
    let input = mapping(json!({"WMETR_HorWdSpd": "ws100", "frequency": "1H"}));
    let schema = FamilySchema::reanalysis_product("merra2", &input).unwrap();
    let rebuilt = FamilySchema::reanalysis_product("merra2", &schema.to_mapping()).unwrap();

    assert_eq!(rebuilt, schema);
    assert_eq!(rebuilt.frequency_class(), Some(FrequencyClass::Hourly));
}

#[test]
fn test_to_mapping_omits_fixed_fields() {
    let schema = FamilySchema::with_defaults(Family::Scada).unwrap();
    let mapping = schema.to_mapping();
    assert!(!mapping.contains_key("WTUR_SupWh"));
    assert_eq!(mapping["frequency"], json!("10T"));
}
