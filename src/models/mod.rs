mod formula;
mod ingredient;
mod nutrition;
mod snapshot;

pub use formula::Formula;
pub use ingredient::{Ingredient, Nutrient};
pub use nutrition::{round_to, NutritionResult};
pub use snapshot::{FormulaSnapshot, SimulationResult};
