//! Requirement resolution across a selection of analyses
//!
//! Column requirements are the union of every selected analysis' columns;
//! frequency requirements are the intersection of every selected analysis'
//! accepted frequency classes, since one dataset has to satisfy all of them.

use super::catalog::{self, AnalysisRequirement};
use crate::app::models::{AnalysisType, ConditionalFlag, Family, FrequencyClass};
use crate::constants::ALL_ANALYSES;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use tracing::debug;

/// Family to required semantic fields
pub type ColumnRequirements = BTreeMap<Family, BTreeSet<&'static str>>;

/// Family to accepted sampling frequency classes
pub type FrequencyRequirements = BTreeMap<Family, BTreeSet<FrequencyClass>>;

/// Analyses selected for resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSelection {
    /// Every analysis in the catalog
    All,
    /// A non-empty, de-duplicated list of analyses in request order
    Named(Vec<AnalysisType>),
}

impl AnalysisSelection {
    /// Parse analysis names, where any `"all"` selects the whole catalog
    ///
    /// Every other name is still checked against the catalog.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::configuration(
                "At least one analysis type must be requested",
            ));
        }

        let mut wildcard = false;
        let mut analyses = Vec::with_capacity(names.len());
        for name in names {
            if name.as_ref().trim() == ALL_ANALYSES {
                wildcard = true;
                continue;
            }
            let analysis: AnalysisType = name.as_ref().parse()?;
            if !analyses.contains(&analysis) {
                analyses.push(analysis);
            }
        }

        if wildcard {
            return Ok(AnalysisSelection::All);
        }
        Ok(AnalysisSelection::Named(analyses))
    }

    /// The selected analyses, expanding the wildcard
    pub fn analyses(&self) -> Vec<AnalysisType> {
        match self {
            AnalysisSelection::All => AnalysisType::ALL.to_vec(),
            AnalysisSelection::Named(analyses) => analyses.clone(),
        }
    }

    /// Catalog entries for the selected analyses
    pub fn requirements(&self) -> Vec<&'static AnalysisRequirement> {
        self.analyses()
            .into_iter()
            .map(catalog::requirement)
            .collect()
    }

    /// Names of the selected analyses, for diagnostics
    pub fn names(&self) -> Vec<String> {
        self.analyses()
            .iter()
            .map(|analysis| analysis.as_str().to_string())
            .collect()
    }
}

impl FromStr for AnalysisSelection {
    type Err = Error;

    /// Parse a comma-separated list of analysis names
    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        AnalysisSelection::parse(&names)
    }
}

/// Column and frequency requirements computed from one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequirements {
    pub columns: ColumnRequirements,
    pub frequencies: FrequencyRequirements,
}

/// Union of the required columns, per family, of every given requirement
pub fn union_columns<'a>(
    requirements: impl IntoIterator<Item = &'a AnalysisRequirement>,
    flags: &BTreeSet<ConditionalFlag>,
) -> ColumnRequirements {
    let mut columns = ColumnRequirements::new();
    for requirement in requirements {
        for family_req in requirement.families {
            columns
                .entry(family_req.family)
                .or_default()
                .extend(family_req.columns_with(flags));
        }
    }
    columns
}

/// Intersection of the accepted frequency classes, per family, of every given requirement
///
/// A family starts from the universal set the first time it is seen, so an
/// empty result always means the requirements conflict.
pub fn intersect_frequencies<'a>(
    requirements: impl IntoIterator<Item = &'a AnalysisRequirement>,
) -> FrequencyRequirements {
    let mut frequencies = FrequencyRequirements::new();
    for requirement in requirements {
        for family_req in requirement.families {
            let accepted = family_req.accepted_frequencies();
            let current = frequencies
                .entry(family_req.family)
                .or_insert_with(FrequencyClass::universal);
            current.retain(|class| accepted.contains(class));
        }
    }
    frequencies
}

/// Required columns for an already-parsed selection
pub fn columns_for(
    selection: &AnalysisSelection,
    flags: &BTreeSet<ConditionalFlag>,
) -> ColumnRequirements {
    let columns = union_columns(selection.requirements(), flags);
    debug!(
        "Resolved column requirements for {:?} with options {:?}: {} families",
        selection.names(),
        flags,
        columns.len()
    );
    columns
}

/// Accepted frequencies for an already-parsed selection
pub fn frequencies_for(selection: &AnalysisSelection) -> FrequencyRequirements {
    let frequencies = intersect_frequencies(selection.requirements());
    debug!(
        "Resolved frequency requirements for {:?}: {} families",
        selection.names(),
        frequencies.len()
    );
    frequencies
}

/// Per-family union of required columns for the named analyses
pub fn resolve_columns<S: AsRef<str>>(
    analyses: &[S],
    flags: &BTreeSet<ConditionalFlag>,
) -> Result<ColumnRequirements> {
    let selection = AnalysisSelection::parse(analyses)?;
    Ok(columns_for(&selection, flags))
}

/// Per-family intersection of accepted frequency classes for the named analyses
///
/// A family present with an empty set means no single frequency satisfies
/// every requested analysis; callers decide whether that is fatal.
pub fn resolve_frequency<S: AsRef<str>>(analyses: &[S]) -> Result<FrequencyRequirements> {
    let selection = AnalysisSelection::parse(analyses)?;
    Ok(frequencies_for(&selection))
}

/// Column and frequency requirements resolved from a single selection
pub fn resolve_both<S: AsRef<str>>(
    analyses: &[S],
    flags: &BTreeSet<ConditionalFlag>,
) -> Result<ResolvedRequirements> {
    let selection = AnalysisSelection::parse(analyses)?;
    Ok(ResolvedRequirements {
        columns: columns_for(&selection, flags),
        frequencies: frequencies_for(&selection),
    })
}
