use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::{BATCH_TOTAL, TOTAL_TOLERANCE};
use crate::error::{FormulaError, Result};

/// Ingredient percentages of a 100-unit batch, keyed by ingredient name.
///
/// Ingredients that are absent read as 0%.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formula {
    proportions: BTreeMap<String, f64>,
}

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the percentage of one ingredient, replacing any previous value.
    pub fn set(&mut self, name: &str, percent: f64) {
        self.proportions.insert(name.to_string(), percent);
    }

    /// Builder form of [`Formula::set`].
    pub fn with(mut self, name: &str, percent: f64) -> Self {
        self.set(name, percent);
        self
    }

    /// Percentage of an ingredient, 0 if it is not in the formula.
    #[inline]
    pub fn get(&self, name: &str) -> f64 {
        self.proportions.get(name).copied().unwrap_or(0.0)
    }

    /// Combined percentage of several ingredients.
    pub fn sum_of(&self, names: &[&str]) -> f64 {
        names.iter().map(|n| self.get(n)).sum()
    }

    /// Sum of all percentages.
    pub fn total(&self) -> f64 {
        self.proportions.values().sum()
    }

    /// Check that the percentages add up to 100 within tolerance.
    pub fn validate_total(&self) -> Result<()> {
        let total = self.total();
        if (total - BATCH_TOTAL).abs() > TOTAL_TOLERANCE {
            return Err(FormulaError::InvalidTotal { total });
        }
        Ok(())
    }

    /// Check that every percentage is a finite value in [0, 100].
    pub fn validate_ranges(&self) -> Result<()> {
        for (name, &value) in &self.proportions {
            if !value.is_finite() || !(0.0..=BATCH_TOTAL).contains(&value) {
                return Err(FormulaError::InvalidPercentage {
                    ingredient: name.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.proportions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.proportions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.proportions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proportions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Formula {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            proportions: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
