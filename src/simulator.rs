use tracing::{debug, warn};

use crate::advisory::{sensory_feedback, substitution_advice};
use crate::calculator;
use crate::catalog::{IngredientCatalog, MoistureProfile};
use crate::config::Settings;
use crate::error::Result;
use crate::models::{Formula, SimulationResult};

/// Runs a formula through validation, the nutrition calculator and the
/// advisory stages enabled in its settings.
#[derive(Debug, Clone)]
pub struct Simulator {
    catalog: IngredientCatalog,
    moisture: MoistureProfile,
    settings: Settings,
}

impl Simulator {
    pub fn new(catalog: IngredientCatalog, settings: Settings) -> Self {
        Self {
            catalog,
            moisture: MoistureProfile::default(),
            settings,
        }
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    pub fn moisture(&self) -> &MoistureProfile {
        &self.moisture
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check a formula at the boundary: known names, sane ranges, 100% total.
    pub fn validate(&self, formula: &Formula) -> Result<()> {
        self.catalog.check_formula(formula)?;
        formula.validate_ranges()?;
        formula.validate_total().inspect_err(|e| warn!("{}", e))
    }

    /// Validate, compute nutrition, then run the enabled advisory stages.
    ///
    /// Nothing is computed for a formula that fails validation.
    pub fn run(&self, formula: &Formula) -> Result<SimulationResult> {
        self.validate(formula)?;

        let nutrition = calculator::compute(formula, &self.catalog, &self.moisture)?;
        let features = self.settings.features;
        let thresholds = &self.settings.thresholds;

        let feedback = features
            .feedback
            .then(|| sensory_feedback(formula, thresholds));
        let suggestion = features
            .substitution
            .then(|| substitution_advice(formula, thresholds));

        debug!(profile = ?self.settings.profile, energy = nutrition.energy, "simulation complete");

        Ok(SimulationResult {
            formula: formula.clone(),
            nutrition,
            feedback,
            suggestion,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(IngredientCatalog::builtin(), Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::*;
    use crate::config::AdvisoryProfile;
    use crate::error::FormulaError;

    fn valid_formula() -> Formula {
        Formula::new()
            .with(LIQUID_EGG_WHITE, 30.0)
            .with(LIQUID_EGG_YOLK, 10.0)
            .with(FLOUR, 45.0)
            .with(GRANULATED_SUGAR, 13.0)
            .with(BAKING_POWDER, 1.8)
            .with(CHEESE_FLAVOR, 0.2)
    }

    #[test]
    fn test_run_suggested_profile() {
        let result = Simulator::default().run(&valid_formula()).unwrap();
        assert!(result.feedback.is_some());
        assert!(result.suggestion.is_some());
        assert!(result.nutrition.energy > 0.0);
    }

    #[test]
    fn test_basic_profile_skips_advisory() {
        let sim = Simulator::new(
            IngredientCatalog::builtin(),
            Settings::for_profile(AdvisoryProfile::Basic),
        );
        assert_eq!(sim.settings().profile, AdvisoryProfile::Basic);
        let result = sim.run(&valid_formula()).unwrap();
        assert!(result.feedback.is_none());
        assert!(result.suggestion.is_none());
    }

    #[test]
    fn test_invalid_total_skips_computation() {
        let formula = valid_formula().with(FLOUR, 40.0);
        match Simulator::default().run(&formula) {
            Err(FormulaError::InvalidTotal { total }) => assert!((total - 95.0).abs() < 1e-9),
            other => panic!("expected InvalidTotal, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_name_rejected_before_total() {
        let formula = Formula::new().with("butter", 100.0);
        assert!(matches!(
            Simulator::default().run(&formula),
            Err(FormulaError::UnknownIngredient(_))
        ));
    }

    #[test]
    fn test_all_water_is_rejected() {
        let formula = Formula::new().with(WATER, 100.0);
        assert!(matches!(
            Simulator::default().run(&formula),
            Err(FormulaError::DegenerateBatch { .. })
        ));
    }
}
