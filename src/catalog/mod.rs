pub mod data;
mod moisture;

use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{FormulaError, Result};
use crate::models::{Formula, Ingredient};

pub use moisture::MoistureProfile;

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only ingredient lookup, fixed once built.
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    /// Ingredients in display order.
    ingredients: Vec<Ingredient>,
    /// Name to position in `ingredients`.
    index: HashMap<String, usize>,
}

impl Default for IngredientCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IngredientCatalog {
    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        Self::build(data::builtin_ingredients())
    }

    /// Build a catalog from a custom ingredient list.
    ///
    /// Duplicate names keep the last entry, at the position of the first.
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Result<Self> {
        if ingredients.is_empty() {
            return Err(FormulaError::InvalidInput(
                "Ingredient catalog is empty".to_string(),
            ));
        }
        if let Some(bad) = ingredients.iter().find(|i| !i.is_valid()) {
            return Err(FormulaError::InvalidInput(format!(
                "Invalid catalog entry: {}",
                bad.debug_string()
            )));
        }
        Ok(Self::build(ingredients))
    }

    fn build(ingredients: Vec<Ingredient>) -> Self {
        let mut ordered: Vec<Ingredient> = Vec::with_capacity(ingredients.len());
        let mut index = HashMap::new();
        for ingredient in ingredients {
            match index.get(&ingredient.name) {
                Some(&pos) => ordered[pos] = ingredient,
                None => {
                    index.insert(ingredient.name.clone(), ordered.len());
                    ordered.push(ingredient);
                }
            }
        }
        Self {
            ingredients: ordered,
            index,
        }
    }

    /// Look up an ingredient by exact name.
    pub fn get(&self, name: &str) -> Result<&Ingredient> {
        self.index
            .get(name)
            .map(|&pos| &self.ingredients[pos])
            .ok_or_else(|| FormulaError::UnknownIngredient(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fail on the first formula entry the catalog does not know.
    pub fn check_formula(&self, formula: &Formula) -> Result<()> {
        match formula.names().find(|n| !self.contains(n)) {
            Some(unknown) => Err(FormulaError::UnknownIngredient(unknown.to_string())),
            None => Ok(()),
        }
    }

    /// Closest catalog name to a misspelled one, if any is close enough.
    pub fn closest_match(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.ingredients
            .iter()
            .map(|i| (i.name.as_str(), jaro_winkler(&i.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(n, _)| n)
    }

    /// A formula with every catalog ingredient set to 0%.
    pub fn empty_formula(&self) -> Formula {
        self.ingredients.iter().map(|i| (i.name.as_str(), 0.0)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
