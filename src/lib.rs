pub mod advisory;
pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod simulator;
pub mod store;

pub use error::{FormulaError, Result};
pub use models::{Formula, FormulaSnapshot, Ingredient, Nutrient, NutritionResult};
pub use simulator::Simulator;
