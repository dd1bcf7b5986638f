use crate::calculator::constants::SERVING_MASS;
use crate::catalog::{IngredientCatalog, MoistureProfile};
use crate::models::{Formula, Nutrient, NutritionResult, SimulationResult};
use crate::store::{Comparison, VersionStore};

/// Display the nutrition panel for one serving.
pub fn display_nutrition(nutrition: &NutritionResult) {
    println!();
    println!("=== Nutrition per serving ({:.0} g) ===", SERVING_MASS);
    println!();
    for (nutrient, value) in nutrition.iter() {
        println!(
            "  {:<8} {:>10.2} {}",
            nutrient.label(),
            value,
            nutrient.unit()
        );
    }
    println!();
}

/// Display a simulation result with whichever advice it carries.
pub fn display_simulation(result: &SimulationResult) {
    display_nutrition(&result.nutrition);

    if let Some(feedback) = &result.feedback {
        println!("--- Sensory prediction ---");
        for line in feedback.lines() {
            println!("  {}", line);
        }
        println!();
    }

    if let Some(suggestion) = &result.suggestion {
        println!("--- Substitution advice ---");
        for line in suggestion.lines() {
            println!("  {}", line);
        }
        println!();
    }
}

/// Width of each numeric column in the comparison table.
const VALUE_WIDTH: usize = 10;

/// Formula rows with the percentage first, so wide ingredient names never shift a column.
pub fn formula_lines(formula: &Formula) -> Vec<String> {
    let mut lines: Vec<String> = formula
        .iter()
        .filter(|(_, p)| *p > 0.0)
        .map(|(name, percent)| format!("  {:>7.2}%  {}", percent, name))
        .collect();
    lines.push(format!("  {:>7.2}%  total", formula.total()));
    lines
}

/// Display the non-zero entries of a formula.
pub fn display_formula(formula: &Formula, title: &str) {
    println!("=== {} ===", title);
    for line in formula_lines(formula) {
        println!("{}", line);
    }
    println!();
}

/// Comparison table lines: a legend mapping column numbers to version names,
/// then one row per nutrient with the values first and the label last.
pub fn comparison_lines(comparison: &Comparison) -> Vec<String> {
    let names = comparison.names();
    let mut lines: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  [{}] {}", i + 1, name))
        .collect();
    lines.push(String::new());

    let mut header = String::from(" ");
    for i in 1..=names.len() {
        header.push_str(&format!(" {:>w$}", format!("[{}]", i), w = VALUE_WIDTH));
    }
    header.push_str("  nutrient");
    lines.push(header);

    for (nutrient, values) in comparison.rows() {
        let mut row = String::from(" ");
        for value in values {
            row.push_str(&format!(" {:>w$.2}", value, w = VALUE_WIDTH));
        }
        row.push_str(&format!("  {} ({})", nutrient.label(), nutrient.unit()));
        lines.push(row);
    }
    lines
}

/// Display each version's formula, then the nutrient table.
pub fn display_comparison(comparison: &Comparison) {
    println!();
    for version in &comparison.versions {
        display_formula(version.formula(), &format!("{} formula (%)", version.name));
    }

    for line in comparison_lines(comparison) {
        println!("{}", line);
    }
    println!();
}

/// Display the saved version names.
pub fn display_versions<S: VersionStore + ?Sized>(store: &S) {
    if store.is_empty() {
        println!("No saved versions.");
        return;
    }

    println!();
    println!("=== Saved versions ({}) ===", store.len());
    for (name, snapshot) in store.get_all() {
        println!(
            "  {} - {:.2} kcal, sugar {:.2} g, sodium {:.2} mg",
            name,
            snapshot.nutrition().get(Nutrient::Energy),
            snapshot.nutrition().get(Nutrient::Sugar),
            snapshot.nutrition().get(Nutrient::Sodium)
        );
    }
    println!();
}

/// Display the catalog with densities per 100 g and free-water fractions.
pub fn display_catalog(catalog: &IngredientCatalog, moisture: &MoistureProfile) {
    println!();
    println!("=== Ingredient catalog ({} items, per 100 g) ===", catalog.len());
    println!();

    for ingredient in catalog.iter() {
        let water = moisture
            .fraction(&ingredient.name)
            .map(|f| format!("  water {:.0}%", f * 100.0))
            .unwrap_or_default();
        println!(
            "  {} - {} kcal, P:{} F:{} C:{} S:{} Na:{}{}",
            ingredient.name,
            ingredient.energy,
            ingredient.protein,
            ingredient.fat,
            ingredient.carbohydrate,
            ingredient.sugar,
            ingredient.sodium,
            water
        );
    }

    let liquids: Vec<String> = moisture
        .iter()
        .map(|(name, fraction)| format!("{} {:.0}%", name, fraction * 100.0))
        .collect();
    println!();
    println!("  Free water: {}", liquids.join(", "));
    println!();
}
