use crate::advisory::thresholds::AdvisoryThresholds;
use crate::catalog::data::{CHEESE_FLAVOR, ERYTHRITOL, GRANULATED_SUGAR, LIQUIDS, PROTEIN_POWDERS};
use crate::models::Formula;

/// Returned when no substitution rule fires.
pub const WELL_BALANCED: &str = "目前配方在甜味、蛋白與液體比例上無明顯異常，整體結構良好。";

pub const REDUCE_PROTEIN: &str = "蛋白粉總量偏高，建議適度減少，並提升液蛋比例以改善乾硬與蓬鬆度。";

/// Suggested ingredient changes, one line per triggered rule.
///
/// Every rule is checked independently; with nothing to suggest the
/// `WELL_BALANCED` line is returned instead of an empty string.
pub fn substitution_advice(formula: &Formula, thresholds: &AdvisoryThresholds) -> String {
    let mut lines: Vec<String> = Vec::new();

    if formula.get(GRANULATED_SUGAR) > thresholds.excess_sugar {
        lines.push(format!(
            "精製細砂比例偏高（>{}%），建議降至{}%，並以赤藻糖醇補足甜味。",
            thresholds.excess_sugar, thresholds.target_sugar
        ));
    }

    if formula.get(ERYTHRITOL) > thresholds.excess_sugar_alcohol {
        lines.push(format!(
            "赤藻糖醇比例偏高（>{}%），可能造成冷涼感，建議適度降低或混合使用。",
            thresholds.excess_sugar_alcohol
        ));
    }

    if formula.sum_of(&PROTEIN_POWDERS) > thresholds.high_protein {
        lines.push(REDUCE_PROTEIN.to_string());
    }

    let liquid_total = formula.sum_of(&LIQUIDS);
    if liquid_total < thresholds.low_liquid {
        lines.push(format!(
            "液體類總量偏低（目前為 {:.1}%），建議提升液蛋或水比例以增加潤口與膨發。",
            liquid_total
        ));
    }

    if formula.get(CHEESE_FLAVOR) < thresholds.target_aroma {
        lines.push(format!(
            "三合力比例過低，建議調整至 {}% 以強化起司香氣。",
            thresholds.target_aroma
        ));
    }

    if lines.is_empty() {
        return WELL_BALANCED.to_string();
    }
    lines.join("\n")
}
