use crate::calculator::constants::{EGG_WHITE_MOISTURE, EGG_YOLK_MOISTURE, WATER_MOISTURE};
use crate::catalog::data::{LIQUID_EGG_WHITE, LIQUID_EGG_YOLK, WATER};
use crate::models::Formula;

/// Free-water fraction of the water-bearing ingredients.
///
/// Everything not listed here contributes no free water, bound moisture in dry goods included.
#[derive(Debug, Clone, Copy)]
pub struct MoistureProfile {
    fractions: [(&'static str, f64); 3],
}

impl Default for MoistureProfile {
    fn default() -> Self {
        Self {
            fractions: [
                (LIQUID_EGG_WHITE, EGG_WHITE_MOISTURE),
                (LIQUID_EGG_YOLK, EGG_YOLK_MOISTURE),
                (WATER, WATER_MOISTURE),
            ],
        }
    }
}

impl MoistureProfile {
    pub fn fraction(&self, name: &str) -> Option<f64> {
        self.fractions
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.fractions.iter().copied()
    }

    /// Free water contributed by a formula, in formula percentage units.
    pub fn total_water(&self, formula: &Formula) -> f64 {
        self.iter()
            .map(|(name, fraction)| formula.get(name) * fraction)
            .sum()
    }
}
