use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("Formula totals {total:.2}% ({:+.2}% from 100%), adjust it to 100%", .total - 100.0)]
    InvalidTotal { total: f64 },

    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Degenerate batch: baked mass {baked_mass:.4} leaves nothing to scale a serving from")]
    DegenerateBatch { baked_mass: f64 },

    #[error("Invalid percentage for {ingredient}: {value} (expected 0-100)")]
    InvalidPercentage { ingredient: String, value: f64 },

    #[error("Saved version not found: {0}")]
    VersionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FormulaError>;
