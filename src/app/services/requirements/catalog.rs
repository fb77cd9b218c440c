//! Static catalog of per-analysis data requirements
//!
//! Each analysis lists the families it reads, the columns it needs from each
//! family, any columns that become mandatory under an optional configuration
//! flag, and the sampling frequency classes it can work with.

use crate::Result;
use crate::app::models::{AnalysisType, ConditionalFlag, Family, FrequencyClass};
use std::collections::BTreeSet;

/// Requirements an analysis places on one data family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyRequirement {
    /// Family the requirement applies to
    pub family: Family,

    /// Semantic fields that must always be present
    pub columns: &'static [&'static str],

    /// Semantic fields that become mandatory when a flag is active
    pub conditional_columns: &'static [(ConditionalFlag, &'static [&'static str])],

    /// Acceptable sampling frequency classes, coarse to fine
    pub frequencies: &'static [FrequencyClass],
}

impl FamilyRequirement {
    /// Frequency classes accepted by this requirement
    pub fn accepted_frequencies(&self) -> BTreeSet<FrequencyClass> {
        self.frequencies.iter().copied().collect()
    }

    /// Mandatory columns plus the conditional columns of every active flag
    pub fn columns_with<'a>(
        &'a self,
        flags: &'a BTreeSet<ConditionalFlag>,
    ) -> impl Iterator<Item = &'static str> + 'a {
        let conditional = self
            .conditional_columns
            .iter()
            .filter(|(flag, _)| flags.contains(flag))
            .flat_map(|(_, columns)| columns.iter().copied());

        self.columns.iter().copied().chain(conditional)
    }
}

/// Requirements of one analysis across every family it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequirement {
    pub analysis: AnalysisType,
    pub families: &'static [FamilyRequirement],
}

impl AnalysisRequirement {
    /// Requirement for a single family, if the analysis reads it
    pub fn family(&self, family: Family) -> Option<&FamilyRequirement> {
        self.families.iter().find(|req| req.family == family)
    }

    /// Whether the analysis reads the given family
    pub fn touches(&self, family: Family) -> bool {
        self.family(family).is_some()
    }
}

// =============================================================================
// Frequency Checks
// =============================================================================

// Spelled out because `FrequencyClass::at_least` is not const. Each set must
// equal `at_least` of its coarsest class; the catalog tests enforce this.

/// Monthly or finer
pub const AT_LEAST_MONTHLY: &[FrequencyClass] = &[
    FrequencyClass::Monthly,
    FrequencyClass::Weekly,
    FrequencyClass::Daily,
    FrequencyClass::Hourly,
    FrequencyClass::Minute,
    FrequencyClass::Second,
    FrequencyClass::SubSecond,
];

/// Daily or finer
pub const AT_LEAST_DAILY: &[FrequencyClass] = &[
    FrequencyClass::Daily,
    FrequencyClass::Hourly,
    FrequencyClass::Minute,
    FrequencyClass::Second,
    FrequencyClass::SubSecond,
];

/// Hourly or finer
pub const AT_LEAST_HOURLY: &[FrequencyClass] = &[
    FrequencyClass::Hourly,
    FrequencyClass::Minute,
    FrequencyClass::Second,
    FrequencyClass::SubSecond,
];

// =============================================================================
// Catalog Entries
// =============================================================================

static MONTE_CARLO_AEP: AnalysisRequirement = AnalysisRequirement {
    analysis: AnalysisType::MonteCarloAep,
    families: &[
        FamilyRequirement {
            family: Family::Meter,
            columns: &["MMTR_SupWh"],
            conditional_columns: &[],
            frequencies: AT_LEAST_MONTHLY,
        },
        FamilyRequirement {
            family: Family::Curtail,
            columns: &["IAVL_DnWh", "IAVL_ExtPwrDnWh"],
            conditional_columns: &[],
            frequencies: AT_LEAST_MONTHLY,
        },
        FamilyRequirement {
            family: Family::Reanalysis,
            columns: &["WMETR_HorWdSpd", "WMETR_AirDen"],
            conditional_columns: &[
                (ConditionalFlag::RegTemperature, &["WMETR_EnvTmp"]),
                (
                    ConditionalFlag::RegWindDirection,
                    &["WMETR_HorWdSpdU", "WMETR_HorWdSpdV"],
                ),
            ],
            frequencies: AT_LEAST_MONTHLY,
        },
    ],
};

static TURBINE_LONG_TERM_GROSS_ENERGY: AnalysisRequirement = AnalysisRequirement {
    analysis: AnalysisType::TurbineLongTermGrossEnergy,
    families: &[
        FamilyRequirement {
            family: Family::Scada,
            columns: &["asset_id", "WMET_HorWdSpd", "WTUR_W"],
            conditional_columns: &[],
            frequencies: AT_LEAST_DAILY,
        },
        FamilyRequirement {
            family: Family::Reanalysis,
            columns: &["WMETR_HorWdSpd", "WMETR_HorWdDir", "WMETR_AirDen"],
            conditional_columns: &[],
            frequencies: AT_LEAST_DAILY,
        },
    ],
};

static ELECTRICAL_LOSSES: AnalysisRequirement = AnalysisRequirement {
    analysis: AnalysisType::ElectricalLosses,
    families: &[
        FamilyRequirement {
            family: Family::Scada,
            columns: &["asset_id", "WTUR_W"],
            conditional_columns: &[],
            frequencies: AT_LEAST_DAILY,
        },
        FamilyRequirement {
            family: Family::Meter,
            columns: &["MMTR_SupWh"],
            conditional_columns: &[],
            frequencies: AT_LEAST_MONTHLY,
        },
    ],
};

static WAKE_LOSSES: AnalysisRequirement = AnalysisRequirement {
    analysis: AnalysisType::WakeLosses,
    families: &[
        FamilyRequirement {
            family: Family::Scada,
            columns: &["asset_id", "WMET_HorWdSpd", "WMET_HorWdDir", "WTUR_W"],
            conditional_columns: &[],
            frequencies: AT_LEAST_HOURLY,
        },
        FamilyRequirement {
            family: Family::Reanalysis,
            columns: &["WMETR_HorWdSpd", "WMETR_HorWdDir"],
            conditional_columns: &[],
            frequencies: AT_LEAST_HOURLY,
        },
    ],
};

/// Catalog entry for an analysis
pub fn requirement(analysis: AnalysisType) -> &'static AnalysisRequirement {
    match analysis {
        AnalysisType::MonteCarloAep => &MONTE_CARLO_AEP,
        AnalysisType::TurbineLongTermGrossEnergy => &TURBINE_LONG_TERM_GROSS_ENERGY,
        AnalysisType::ElectricalLosses => &ELECTRICAL_LOSSES,
        AnalysisType::WakeLosses => &WAKE_LOSSES,
    }
}

/// Catalog entry for an analysis name, failing on unknown names
pub fn lookup(name: &str) -> Result<&'static AnalysisRequirement> {
    let analysis: AnalysisType = name.parse()?;
    Ok(requirement(analysis))
}

/// Every catalog entry, in catalog order
pub fn entries() -> impl Iterator<Item = &'static AnalysisRequirement> {
    AnalysisType::ALL.into_iter().map(requirement)
}
