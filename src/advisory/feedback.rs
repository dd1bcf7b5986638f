use crate::advisory::thresholds::AdvisoryThresholds;
use crate::catalog::data::{
    CHEESE_FLAVOR, CHEESE_GROUP, ERYTHRITOL, GRANULATED_SUGAR, LIQUIDS, PROTEIN_POWDERS,
};
use crate::models::Formula;

pub const MOIST_CRUMB: &str = "口感潤澤、蓬鬆感佳。";
pub const DRY_CRUMB: &str = "可能偏乾或膨發不足，可考慮增加液蛋或水分。";
pub const STRONG_CHEESE: &str = "起司風味濃郁，適合重口味起司點心。";
pub const COOLING_AFTERTASTE: &str = "甜感略帶冷涼感，建議適度混合砂糖調和。";
pub const LOW_SWEETNESS: &str = "甜度可能略低，成品風味偏淡。";
pub const HIGH_PROTEIN_TEXTURE: &str = "蛋白質含量高，需注意是否影響膨發與口感密實度。";

fn weak_aroma(target: f64) -> String {
    format!("起司香氣偏弱，建議提升香料比例至 {}%。", target)
}

/// Predicted taste and texture, one line per triggered rule group.
///
/// Groups run in a fixed order (liquid, cheese, sweetness, protein) and
/// each contributes at most one line.
pub fn sensory_feedback(formula: &Formula, thresholds: &AdvisoryThresholds) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Liquid
    if formula.sum_of(&LIQUIDS) > thresholds.moist_liquid_min {
        lines.push(MOIST_CRUMB.to_string());
    } else {
        lines.push(DRY_CRUMB.to_string());
    }

    // Cheese
    if formula.sum_of(&CHEESE_GROUP) > thresholds.strong_cheese_min {
        lines.push(STRONG_CHEESE.to_string());
    } else if formula.get(CHEESE_FLAVOR) < thresholds.weak_aroma_max {
        lines.push(weak_aroma(thresholds.target_aroma));
    }

    // Sweetness
    if formula.get(ERYTHRITOL) > thresholds.cooling_sugar_alcohol {
        lines.push(COOLING_AFTERTASTE.to_string());
    } else if formula.get(GRANULATED_SUGAR) < thresholds.low_sweetness_sugar {
        lines.push(LOW_SWEETNESS.to_string());
    }

    // Protein
    if formula.sum_of(&PROTEIN_POWDERS) > thresholds.high_protein {
        lines.push(HIGH_PROTEIN_TEXTURE.to_string());
    }

    lines.join("\n")
}
