//! Built-in ingredient names and composition data.

use crate::models::Ingredient;

pub const LIQUID_EGG_WHITE: &str = "冷藏未殺菌液蛋白";
pub const LIQUID_EGG_YOLK: &str = "冷藏未殺菌液蛋黃";
pub const SOY_PROTEIN: &str = "大豆蛋白";
pub const WHEY_PROTEIN: &str = "乳清蛋白";
pub const GRANULATED_SUGAR: &str = "精製細砂";
pub const MALT_SYRUP: &str = "麥芽糖漿HM85";
pub const WATER: &str = "自來水";
pub const FLOUR: &str = "統一麵粉";
pub const BAKING_POWDER: &str = "無鋁泡打粉";
pub const CEREAL_MILK_POWDER: &str = "穀物奶粉";
pub const ERYTHRITOL: &str = "赤藻糖醇";
pub const CHEESE_POWDER: &str = "乳酪粉";
pub const CHEESE_FLAVOR: &str = "三合力9285";
pub const PARMESAN_POWDER: &str = "帕瑪森起士粉";

/// Water-bearing ingredients, in the order they are summed.
pub const LIQUIDS: [&str; 3] = [LIQUID_EGG_WHITE, LIQUID_EGG_YOLK, WATER];

/// Ingredients that carry the cheese character.
pub const CHEESE_GROUP: [&str; 3] = [CHEESE_POWDER, PARMESAN_POWDER, CHEESE_FLAVOR];

/// Protein powders.
pub const PROTEIN_POWDERS: [&str; 2] = [SOY_PROTEIN, WHEY_PROTEIN];

/// Composition per 100 g: energy (kcal), protein, fat, carbohydrate, sugar (g), sodium (mg).
pub fn builtin_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new(LIQUID_EGG_WHITE, 52.0, 10.2, 0.1, 0.8, 0.0, 400.0),
        Ingredient::new(LIQUID_EGG_YOLK, 322.0, 15.8, 26.5, 3.6, 0.0, 120.0),
        Ingredient::new(SOY_PROTEIN, 400.0, 90.0, 1.2, 1.5, 0.0, 750.0),
        Ingredient::new(WHEY_PROTEIN, 392.0, 80.0, 7.3, 5.5, 5.0, 800.0),
        Ingredient::new(GRANULATED_SUGAR, 384.0, 0.0, 0.0, 100.0, 100.0, 0.0),
        Ingredient::new(MALT_SYRUP, 302.0, 0.0, 0.0, 75.0, 35.0, 2.0),
        Ingredient::new(WATER, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        Ingredient::new(FLOUR, 357.0, 9.8, 1.0, 76.0, 0.3, 4.0),
        Ingredient::new(BAKING_POWDER, 156.0, 0.0, 0.0, 39.0, 0.0, 7500.0),
        Ingredient::new(CEREAL_MILK_POWDER, 485.0, 9.7, 7.0, 79.0, 2.0, 37.0),
        Ingredient::new(ERYTHRITOL, 0.0, 0.0, 0.0, 97.5, 0.0, 0.0),
        Ingredient::new(CHEESE_POWDER, 514.0, 13.5, 13.6, 20.7, 20.7, 0.0),
        Ingredient::new(CHEESE_FLAVOR, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        Ingredient::new(PARMESAN_POWDER, 420.0, 35.0, 30.0, 5.0, 0.0, 1800.0),
    ]
}
