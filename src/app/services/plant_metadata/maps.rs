//! Plant-wide views over the family schemas
//!
//! A [`PlantMap`] holds one value per fixed family plus one value per
//! reanalysis product. It is how the aggregate exposes column, dtype and
//! unit maps to data-loading code.

use crate::app::models::{DataType, Family};
use serde::Serialize;
use std::collections::BTreeMap;

/// One value per fixed family and per reanalysis product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantMap<T> {
    pub scada: T,
    pub meter: T,
    pub tower: T,
    pub status: T,
    pub curtail: T,
    pub asset: T,
    /// Product name to value; empty when the plant has no reanalysis data
    pub reanalysis: BTreeMap<String, T>,
}

impl<T> PlantMap<T> {
    /// Value for a fixed family; reanalysis is keyed by product instead
    pub fn fixed(&self, family: Family) -> Option<&T> {
        match family {
            Family::Scada => Some(&self.scada),
            Family::Meter => Some(&self.meter),
            Family::Tower => Some(&self.tower),
            Family::Status => Some(&self.status),
            Family::Curtail => Some(&self.curtail),
            Family::Asset => Some(&self.asset),
            Family::Reanalysis => None,
        }
    }

    /// Value for a reanalysis product
    pub fn product(&self, name: &str) -> Option<&T> {
        self.reanalysis.get(name)
    }

    /// Fixed families paired with their values, in document order
    pub fn iter_fixed(&self) -> impl Iterator<Item = (Family, &T)> {
        Family::FIXED
            .into_iter()
            .filter_map(move |family| self.fixed(family).map(|value| (family, value)))
    }
}

/// Semantic field to column name, per family
pub type ColumnMap = PlantMap<BTreeMap<&'static str, String>>;

/// Semantic field to data type, per family
pub type DtypeMap = PlantMap<BTreeMap<&'static str, DataType>>;

/// Semantic field to physical unit, per family
pub type UnitMap = PlantMap<BTreeMap<&'static str, Option<&'static str>>>;
