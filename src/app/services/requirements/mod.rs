//! Analysis requirement service
//!
//! This module holds the static requirement catalog and the resolver that
//! combines the requirements of several analyses into one column requirement
//! and one sampling frequency requirement per data family.

pub mod catalog;
pub mod resolver;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use catalog::{AnalysisRequirement, FamilyRequirement};
pub use resolver::{
    AnalysisSelection, ColumnRequirements, FrequencyRequirements, ResolvedRequirements,
    columns_for, frequencies_for, intersect_frequencies, resolve_both, resolve_columns,
    resolve_frequency, union_columns,
};
