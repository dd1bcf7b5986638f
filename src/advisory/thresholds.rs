use serde::{Deserialize, Serialize};

/// Cooling-aftertaste threshold used by the feedback-only variant.
pub const COOLING_THRESHOLD_STRICT: f64 = 4.0;

/// Cooling-aftertaste threshold used alongside substitution advice.
pub const COOLING_THRESHOLD_RELAXED: f64 = 6.0;

/// Every percentage threshold the advisory rules compare against.
///
/// Comparisons are strict: a rule fires above (or below) the value, never at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// Liquid total above which the crumb reads moist and well risen.
    pub moist_liquid_min: f64,
    /// Cheese group total above which the cheese flavor is strong.
    pub strong_cheese_min: f64,
    /// Flavor concentrate below which the aroma is weak.
    pub weak_aroma_max: f64,
    /// Sugar alcohol above which a cooling aftertaste is expected.
    pub cooling_sugar_alcohol: f64,
    /// Granulated sugar below which sweetness is low.
    pub low_sweetness_sugar: f64,
    /// Protein powder total above which density and rise suffer.
    pub high_protein: f64,
    /// Granulated sugar above which a reduction is advised.
    pub excess_sugar: f64,
    /// Sugar level recommended after a reduction.
    pub target_sugar: f64,
    /// Sugar alcohol above which blending is advised.
    pub excess_sugar_alcohol: f64,
    /// Liquid total below which more liquid is advised.
    pub low_liquid: f64,
    /// Recommended flavor concentrate level; lower values get advice.
    pub target_aroma: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            moist_liquid_min: 45.0,
            strong_cheese_min: 8.0,
            weak_aroma_max: 0.15,
            cooling_sugar_alcohol: COOLING_THRESHOLD_RELAXED,
            low_sweetness_sugar: 12.0,
            high_protein: 10.0,
            excess_sugar: 15.0,
            target_sugar: 12.0,
            excess_sugar_alcohol: 6.0,
            low_liquid: 35.0,
            target_aroma: 0.2,
        }
    }
}

impl AdvisoryThresholds {
    /// Defaults with the stricter cooling threshold.
    pub fn strict_cooling() -> Self {
        Self {
            cooling_sugar_alcohol: COOLING_THRESHOLD_STRICT,
            ..Default::default()
        }
    }
}
