use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

/// Nutrition values for one serving, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub sugar_alcohol: f64,
}

impl NutritionResult {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::SugarAlcohol => self.sugar_alcohol,
        }
    }

    pub(crate) fn slot_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Energy => &mut self.energy,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Carbohydrate => &mut self.carbohydrate,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::SugarAlcohol => &mut self.sugar_alcohol,
        }
    }

    /// (nutrient, value) pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }

    /// Copy with every value rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        let mut out = *self;
        for n in Nutrient::ALL {
            *out.slot_mut(n) = round_to(self.get(n), decimals);
        }
        out
    }
}

impl std::ops::Add for NutritionResult {
    type Output = NutritionResult;

    fn add(self, other: NutritionResult) -> NutritionResult {
        let mut out = self;
        for n in Nutrient::ALL {
            *out.slot_mut(n) += other.get(n);
        }
        out
    }
}

impl std::iter::Sum for NutritionResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionResult::default(), |acc, n| acc + n)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
