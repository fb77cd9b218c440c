//! Model fitting contract
//!
//! Analyses that fit regressions hand their feature matrix and target to an
//! external hyperparameter search. This module only describes that contract;
//! nothing else in the crate depends on it and no algorithm ships here.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Row-major feature matrix, one row per sample
pub type Features = [Vec<f64>];

/// A fitted or fittable regression model
pub trait Regressor: Send + Sync {
    /// Fit the model to training data
    fn fit(&mut self, features: &Features, target: &[f64]) -> Result<()>;

    /// Predict one value per feature row
    fn predict(&self, features: &Features) -> Result<Vec<f64>>;
}

/// Cross-validation scheme used to score candidate hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum CrossValidation {
    KFold { n_splits: usize },
}

impl Default for CrossValidation {
    fn default() -> Self {
        CrossValidation::KFold { n_splits: 5 }
    }
}

/// Description of a hyperparameter search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperparameterSearch {
    /// Regression algorithm name understood by the searcher
    pub algorithm: String,

    /// Number of candidate configurations to evaluate
    pub budget: usize,

    pub cross_validation: CrossValidation,
}

impl HyperparameterSearch {
    pub fn new(
        algorithm: impl Into<String>,
        budget: usize,
        cross_validation: CrossValidation,
    ) -> Result<Self> {
        let search = Self {
            algorithm: algorithm.into(),
            budget,
            cross_validation,
        };
        search.validate()?;
        Ok(search)
    }

    /// Reject searches that cannot run
    pub fn validate(&self) -> Result<()> {
        if self.algorithm.trim().is_empty() {
            return Err(Error::configuration("Search algorithm name must not be empty"));
        }
        if self.budget == 0 {
            return Err(Error::configuration(format!(
                "Search budget for '{}' must be at least 1",
                self.algorithm
            )));
        }
        match self.cross_validation {
            CrossValidation::KFold { n_splits } if n_splits < 2 => Err(Error::configuration(
                format!("K-fold cross-validation needs at least 2 splits, got {}", n_splits),
            )),
            CrossValidation::KFold { .. } => Ok(()),
        }
    }
}

/// External collaborator that searches hyperparameters and returns the best model
pub trait HyperparameterSearcher {
    fn search(
        &self,
        config: &HyperparameterSearch,
        features: &Features,
        target: &[f64],
    ) -> Result<Box<dyn Regressor>>;
}
