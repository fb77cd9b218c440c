//! Integration tests for requirement resolution through the public API

use plant_metadata::{
    AnalysisSelection, ConditionalFlag, Family, FrequencyClass, resolve_both, resolve_columns,
    resolve_frequency,
};
use std::collections::BTreeSet;

/// Test the requirements of an electrical losses run
///
/// Purpose: Validate the full column and frequency requirements of a single analysis
/// Benefit: Ensures loaders fetch exactly the SCADA and meter columns the analysis reads
#[test]
fn test_electrical_losses_requirements() {
    let resolved = resolve_both(&["ElectricalLosses"], &BTreeSet::new()).unwrap();

    let families: Vec<_> = resolved.columns.keys().copied().collect();
    assert_eq!(families, vec![Family::Scada, Family::Meter]);
    assert_eq!(
        resolved.columns[&Family::Scada],
        ["asset_id", "WTUR_W"].into_iter().collect::<BTreeSet<_>>()
    );
    assert_eq!(
        resolved.columns[&Family::Meter],
        ["MMTR_SupWh"].into_iter().collect::<BTreeSet<_>>()
    );
    assert_eq!(
        resolved.frequencies[&Family::Meter],
        FrequencyClass::Monthly.at_least()
    );
}

/// Test combining analyses with optional regressors
///
/// Purpose: Validate unions of columns and intersections of frequencies across analyses
/// Benefit: Ensures one dataset configuration can serve several analyses at once
#[test]
fn test_combined_analyses_with_options() {
    let flags: BTreeSet<_> = [ConditionalFlag::RegWindDirection].into_iter().collect();
    let columns = resolve_columns(&["MonteCarloAEP", "WakeLosses"], &flags).unwrap();
    let frequencies = resolve_frequency(&["MonteCarloAEP", "WakeLosses"]).unwrap();

    let reanalysis = &columns[&Family::Reanalysis];
    for field in [
        "WMETR_HorWdSpd",
        "WMETR_AirDen",
        "WMETR_HorWdDir",
        "WMETR_HorWdSpdU",
        "WMETR_HorWdSpdV",
    ] {
        assert!(reanalysis.contains(field), "{}", field);
    }
    assert!(!reanalysis.contains("WMETR_EnvTmp"));

    assert_eq!(
        frequencies[&Family::Reanalysis],
        FrequencyClass::Hourly.at_least()
    );
    assert_eq!(
        frequencies[&Family::Meter],
        FrequencyClass::Monthly.at_least()
    );
    assert!(!frequencies.contains_key(&Family::Tower));
}

/// Test selection parsing from command-line style input
///
/// Purpose: Validate comma-separated lists and the wildcard
/// Benefit: Ensures the CLI and library agree on what a selection means
#[test]
fn test_selection_parsing() {
    let selection: AnalysisSelection = "WakeLosses, ElectricalLosses,WakeLosses".parse().unwrap();
    assert_eq!(selection.names(), vec!["WakeLosses", "ElectricalLosses"]);

    let all: AnalysisSelection = "ElectricalLosses,all".parse().unwrap();
    assert_eq!(all, AnalysisSelection::All);

    let err = "all,Bogus".parse::<AnalysisSelection>().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("Bogus"));

    assert!("".parse::<AnalysisSelection>().unwrap_err().is_configuration());
    assert!(
        "WakeLoss"
            .parse::<AnalysisSelection>()
            .unwrap_err()
            .to_string()
            .contains("WakeLoss")
    );
}
