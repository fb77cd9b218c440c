//! Shared test utilities for requirement catalog and resolver tests

use crate::app::models::{ConditionalFlag, FrequencyClass};
use std::collections::BTreeSet;


/// No conditional options active
pub fn no_flags() -> BTreeSet<ConditionalFlag> {
    BTreeSet::new()
}

/// Build a column set from string literals
pub fn column_set(columns: &[&'static str]) -> BTreeSet<&'static str> {
    columns.iter().copied().collect()
}

/// Accepted classes for "at least monthly"
pub fn monthly_or_finer() -> BTreeSet<FrequencyClass> {
    FrequencyClass::Monthly.at_least()
}

/// Every analysis name in the catalog
pub const ALL_ANALYSIS_NAMES: &[&str] = &[
    "MonteCarloAEP",
    "TurbineLongTermGrossEnergy",
    "ElectricalLosses",
    "WakeLosses",
];
