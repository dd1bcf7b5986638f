/// Mass of one batch in formula units; percentages sum to this.
pub const BATCH_TOTAL: f64 = 100.0;

/// Allowed deviation of a formula total from `BATCH_TOTAL`.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// Serving size in grams.
pub const SERVING_MASS: f64 = 25.0;

/// Share of the dry mass that survives baking (3% evaporative loss).
pub const BAKE_RETENTION: f64 = 0.97;

/// Baked mass at or below this cannot be scaled to a serving.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Decimal places kept in reported nutrition values.
pub const RESULT_DECIMALS: u32 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Moisture profile (free-water fraction)
// ─────────────────────────────────────────────────────────────────────────────

pub const EGG_WHITE_MOISTURE: f64 = 0.88;
pub const EGG_YOLK_MOISTURE: f64 = 0.50;
pub const WATER_MOISTURE: f64 = 1.00;

/// Sugar-alcohol counted per 100 g of the erythritol ingredient.
pub const SUGAR_ALCOHOL_DENSITY: f64 = 97.5;
