use crisp_formulator::advisory::feedback::{
    COOLING_AFTERTASTE, DRY_CRUMB, HIGH_PROTEIN_TEXTURE, LOW_SWEETNESS, MOIST_CRUMB, STRONG_CHEESE,
};
use crisp_formulator::advisory::substitution::{REDUCE_PROTEIN, WELL_BALANCED};
use crisp_formulator::advisory::{sensory_feedback, substitution_advice, AdvisoryThresholds};
use crisp_formulator::catalog::data::*;
use crisp_formulator::config::{AdvisoryProfile, Settings};
use crisp_formulator::models::Formula;

fn balanced_formula() -> Formula {
    Formula::new()
        .with(LIQUID_EGG_WHITE, 30.0)
        .with(LIQUID_EGG_YOLK, 10.0)
        .with(SOY_PROTEIN, 3.0)
        .with(WHEY_PROTEIN, 2.0)
        .with(GRANULATED_SUGAR, 12.0)
        .with(ERYTHRITOL, 3.0)
        .with(FLOUR, 32.0)
        .with(BAKING_POWDER, 1.5)
        .with(CHEESE_POWDER, 3.0)
        .with(PARMESAN_POWDER, 3.0)
        .with(CHEESE_FLAVOR, 0.5)
}

fn heavy_formula() -> Formula {
    Formula::new()
        .with(LIQUID_EGG_WHITE, 40.0)
        .with(WATER, 10.0)
        .with(SOY_PROTEIN, 8.0)
        .with(WHEY_PROTEIN, 4.0)
        .with(ERYTHRITOL, 5.0)
        .with(CHEESE_POWDER, 6.0)
        .with(PARMESAN_POWDER, 4.0)
        .with(CHEESE_FLAVOR, 0.1)
        .with(FLOUR, 22.9)
}

#[test]
fn test_balanced_feedback_only_liquid_line() {
    let text = sensory_feedback(&balanced_formula(), &AdvisoryThresholds::default());
    assert_eq!(text, DRY_CRUMB);
}

#[test]
fn test_balanced_substitution_is_well_balanced() {
    let text = substitution_advice(&balanced_formula(), &AdvisoryThresholds::default());
    assert_eq!(text, WELL_BALANCED);
}

#[test]
fn test_feedback_group_order() {
    let text = sensory_feedback(&heavy_formula(), &AdvisoryThresholds::strict_cooling());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![MOIST_CRUMB, STRONG_CHEESE, COOLING_AFTERTASTE, HIGH_PROTEIN_TEXTURE]
    );
}

#[test]
fn test_cooling_threshold_differs_by_profile() {
    // 5% erythritol: above the strict threshold, below the relaxed one.
    let formula = heavy_formula();

    let history = Settings::for_profile(AdvisoryProfile::History);
    let strict = sensory_feedback(&formula, &history.thresholds);
    assert!(strict.contains(COOLING_AFTERTASTE));

    let suggested = Settings::for_profile(AdvisoryProfile::Suggested);
    let relaxed = sensory_feedback(&formula, &suggested.thresholds);
    assert!(!relaxed.contains(COOLING_AFTERTASTE));
    // Falls through to the sugar check instead.
    assert!(relaxed.contains(LOW_SWEETNESS));
}

#[test]
fn test_substitution_order_and_content() {
    let formula = Formula::new()
        .with(GRANULATED_SUGAR, 20.0)
        .with(ERYTHRITOL, 7.0)
        .with(SOY_PROTEIN, 6.0)
        .with(WHEY_PROTEIN, 6.0)
        .with(WATER, 20.0)
        .with(FLOUR, 41.0);
    let text = substitution_advice(&formula, &AdvisoryThresholds::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("精製細砂比例偏高"));
    assert!(lines[1].starts_with("赤藻糖醇比例偏高（>6%）"));
    assert_eq!(lines[2], REDUCE_PROTEIN);
    assert!(lines[3].contains("目前為 20.0%"));
    assert!(lines[4].contains("0.2%"));
}

#[test]
fn test_advice_independent_of_insertion_order() {
    let forward = balanced_formula();
    let reversed: Formula = {
        let mut pairs: Vec<(String, f64)> =
            forward.iter().map(|(n, p)| (n.to_string(), p)).collect();
        pairs.reverse();
        pairs.into_iter().collect()
    };

    let t = AdvisoryThresholds::default();
    assert_eq!(sensory_feedback(&forward, &t), sensory_feedback(&reversed, &t));
    assert_eq!(substitution_advice(&forward, &t), substitution_advice(&reversed, &t));
}

#[test]
fn test_sweetness_warning_clears_at_twelve_percent() {
    let t = AdvisoryThresholds::default();
    let low = Formula::new().with(GRANULATED_SUGAR, 11.9);
    let enough = Formula::new().with(GRANULATED_SUGAR, 12.0);

    assert!(sensory_feedback(&low, &t).contains(LOW_SWEETNESS));
    assert!(!sensory_feedback(&enough, &t).contains(LOW_SWEETNESS));
}
