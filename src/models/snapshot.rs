use serde::{Deserialize, Serialize};

use crate::models::{Formula, NutritionResult};

/// One simulation run: the formula and everything computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub formula: Formula,
    pub nutrition: NutritionResult,

    /// Sensory feedback, when the profile enables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    /// Substitution advice, when the profile enables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A saved, named simulation kept for later comparison.
///
/// Snapshots are never edited; saving under an existing name replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaSnapshot {
    pub name: String,

    #[serde(flatten)]
    pub result: SimulationResult,
}

impl FormulaSnapshot {
    pub fn new(name: &str, result: SimulationResult) -> Self {
        Self {
            name: name.to_string(),
            result,
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.result.formula
    }

    pub fn nutrition(&self) -> &NutritionResult {
        &self.result.nutrition
    }
}
