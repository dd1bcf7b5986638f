use tracing::{debug, warn};

use crate::calculator::constants::*;
use crate::catalog::data::ERYTHRITOL;
use crate::catalog::{IngredientCatalog, MoistureProfile};
use crate::error::{FormulaError, Result};
use crate::models::{Formula, Nutrient, NutritionResult};

/// Intermediate masses of the serving scale-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchBreakdown {
    /// Free water removed, in formula units.
    pub total_water: f64,
    /// Batch mass left after the free water is removed.
    pub dry_mass: f64,
    /// Pre-bake mass consistent with `dry_mass` after evaporative loss.
    pub baked_mass: f64,
    /// Multiplier from per-batch to per-serving amounts.
    pub scale_factor: f64,
}

/// Work out the water, dry, and baked masses of a formula.
///
/// Fails with `DegenerateBatch` when the baked mass is too small to scale from.
pub fn batch_breakdown(formula: &Formula, moisture: &MoistureProfile) -> Result<BatchBreakdown> {
    let total_water = moisture.total_water(formula);
    let dry_mass = BATCH_TOTAL - total_water;
    let baked_mass = dry_mass / BAKE_RETENTION;

    if !baked_mass.is_finite() || baked_mass <= DEGENERATE_EPSILON {
        warn!(total_water, baked_mass, "degenerate batch rejected");
        return Err(FormulaError::DegenerateBatch { baked_mass });
    }

    let scale_factor = SERVING_MASS / baked_mass;
    debug!(total_water, dry_mass, baked_mass, scale_factor, "batch breakdown");

    Ok(BatchBreakdown {
        total_water,
        dry_mass,
        baked_mass,
        scale_factor,
    })
}

/// Per-ingredient, unrounded serving contributions, in formula order.
///
/// Does not check that the formula totals 100; callers validate first.
pub fn contributions(
    formula: &Formula,
    catalog: &IngredientCatalog,
    moisture: &MoistureProfile,
) -> Result<Vec<(String, NutritionResult)>> {
    let breakdown = batch_breakdown(formula, moisture)?;
    let factor = breakdown.scale_factor;

    formula
        .iter()
        .map(|(name, percent)| {
            let ingredient = catalog.get(name)?;
            let share = percent / BATCH_TOTAL * factor;

            let mut part = NutritionResult::default();
            for nutrient in Nutrient::CATALOG {
                *part.slot_mut(nutrient) = ingredient.density(nutrient) * share;
            }
            if name == ERYTHRITOL {
                part.sugar_alcohol = SUGAR_ALCOHOL_DENSITY * share;
            }
            Ok((name.to_string(), part))
        })
        .collect()
}

/// Nutrition per serving, rounded for reporting.
///
/// Does not check that the formula totals 100; callers validate first.
pub fn compute(
    formula: &Formula,
    catalog: &IngredientCatalog,
    moisture: &MoistureProfile,
) -> Result<NutritionResult> {
    let total: NutritionResult = contributions(formula, catalog, moisture)?
        .into_iter()
        .map(|(_, part)| part)
        .sum();
    Ok(total.rounded(RESULT_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::*;
    use crate::models::round_to;

    fn base_formula() -> Formula {
        Formula::new()
            .with(BAKING_POWDER, 2.0)
            .with(GRANULATED_SUGAR, 13.0)
            .with(FLOUR, 50.0)
            .with(WATER, 35.0)
    }

    #[test]
    fn test_zero_water_breakdown() {
        let formula = Formula::new().with(FLOUR, 100.0);
        let b = batch_breakdown(&formula, &MoistureProfile::default()).unwrap();
        assert_eq!(b.total_water, 0.0);
        assert!((b.baked_mass - 103.0928).abs() < 1e-3);
        assert!((b.scale_factor - 0.2425).abs() < 1e-4);
    }

    #[test]
    fn test_breakdown_with_water() {
        let b = batch_breakdown(&base_formula(), &MoistureProfile::default()).unwrap();
        assert!((b.total_water - 35.0).abs() < 1e-9);
        assert!((b.dry_mass - 65.0).abs() < 1e-9);
        assert!((b.baked_mass - 67.0103).abs() < 1e-3);
        assert!((b.scale_factor - 0.3731).abs() < 1e-4);
    }

    #[test]
    fn test_all_water_is_degenerate() {
        let formula = Formula::new().with(WATER, 100.0);
        match batch_breakdown(&formula, &MoistureProfile::default()) {
            Err(FormulaError::DegenerateBatch { baked_mass }) => assert!(baked_mass.abs() < 1e-9),
            other => panic!("expected DegenerateBatch, got {:?}", other),
        }
    }

    #[test]
    fn test_excess_water_is_degenerate() {
        let formula = Formula::new().with(WATER, 100.0).with(LIQUID_EGG_WHITE, 20.0);
        assert!(matches!(
            batch_breakdown(&formula, &MoistureProfile::default()),
            Err(FormulaError::DegenerateBatch { .. })
        ));
    }

    #[test]
    fn test_baking_powder_sodium_contribution() {
        let parts = contributions(
            &base_formula(),
            &IngredientCatalog::builtin(),
            &MoistureProfile::default(),
        )
        .unwrap();
        let (_, bp) = parts.iter().find(|(n, _)| n == BAKING_POWDER).unwrap();
        assert_eq!(round_to(bp.sodium, 2), 55.96);
    }

    #[test]
    fn test_sugar_alcohol_tracks_erythritol_only() {
        let formula = Formula::new()
            .with(ERYTHRITOL, 10.0)
            .with(GRANULATED_SUGAR, 10.0)
            .with(FLOUR, 80.0);
        let catalog = IngredientCatalog::builtin();
        let moisture = MoistureProfile::default();
        let result = compute(&formula, &catalog, &moisture).unwrap();

        let factor = SERVING_MASS / (BATCH_TOTAL / BAKE_RETENTION);
        let expected = (97.5 * 0.10 * factor * 100.0).round() / 100.0;
        assert!((result.sugar_alcohol - expected).abs() < 1e-9);
        // Erythritol also counts toward carbohydrate.
        assert!(result.carbohydrate > result.sugar_alcohol);
    }

    #[test]
    fn test_unknown_ingredient_aborts() {
        let formula = base_formula().with("lard", 0.0);
        let err = compute(
            &formula,
            &IngredientCatalog::builtin(),
            &MoistureProfile::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FormulaError::UnknownIngredient(name) if name == "lard"));
    }
}
