use serde::{Deserialize, Serialize};

/// The catalog nutrients plus the separately tracked sugar-alcohol value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Sugar,
    Sodium,
    SugarAlcohol,
}

impl Nutrient {
    /// Every nutrient in reporting order.
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Sugar,
        Nutrient::Sodium,
        Nutrient::SugarAlcohol,
    ];

    /// The six nutrients carried by every catalog entry.
    pub const CATALOG: [Nutrient; 6] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Sugar,
        Nutrient::Sodium,
    ];

    /// Label as printed on the nutrition panel.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "熱量",
            Nutrient::Protein => "蛋白質",
            Nutrient::Fat => "脂肪",
            Nutrient::Carbohydrate => "碳水",
            Nutrient::Sugar => "糖",
            Nutrient::Sodium => "鈉",
            Nutrient::SugarAlcohol => "赤藻糖醇",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }
}

/// A raw ingredient with its composition per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Energy")]
    pub energy: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,

    #[serde(rename = "Carbohydrate")]
    pub carbohydrate: f64,

    #[serde(rename = "Sugar")]
    pub sugar: f64,

    #[serde(rename = "Sodium")]
    pub sodium: f64,
}

impl Ingredient {
    pub fn new(
        name: &str,
        energy: f64,
        protein: f64,
        fat: f64,
        carbohydrate: f64,
        sugar: f64,
        sodium: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            energy,
            protein,
            fat,
            carbohydrate,
            sugar,
            sodium,
        }
    }

    /// Density of a catalog nutrient per 100 g.
    ///
    /// The sugar-alcohol value is not part of the bulk composition and reads as 0.
    #[inline]
    pub fn density(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::SugarAlcohol => 0.0,
        }
    }

    /// Basic validation: every density is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && Nutrient::CATALOG
                .iter()
                .all(|&n| self.density(n).is_finite() && self.density(n) >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} F:{} C:{} S:{} Na:{}",
            self.name,
            self.energy,
            self.protein,
            self.fat,
            self.carbohydrate,
            self.sugar,
            self.sodium
        )
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}
