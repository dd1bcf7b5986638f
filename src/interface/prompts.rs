use dialoguer::{Confirm, Input, MultiSelect};

use crate::calculator::constants::BATCH_TOTAL;
use crate::catalog::IngredientCatalog;
use crate::error::{FormulaError, Result};
use crate::models::Formula;

/// Default name offered when saving a version.
pub const DEFAULT_VERSION_NAME: &str = "v2.0";

/// Parse a percentage typed by the user.
pub fn parse_percentage(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse()
        .map_err(|_| FormulaError::InvalidInput(format!("Not a number: {}", input.trim())))?;

    if !(0.0..=BATCH_TOTAL).contains(&value) {
        return Err(FormulaError::InvalidInput(format!(
            "{} is outside 0-100",
            value
        )));
    }
    Ok(value)
}

/// Prompt for one percentage, re-asking until it parses.
fn prompt_percentage(name: &str, running_total: f64) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} (%) [total so far {:.2}]", name, running_total))
            .default("0".to_string())
            .interact_text()?;

        match parse_percentage(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Ask for the percentage of every catalog ingredient, in catalog order.
///
/// A formula that does not total 100% is reported and can be entered again.
pub fn prompt_formula(catalog: &IngredientCatalog) -> Result<Formula> {
    println!("Enter ingredient percentages; they must total 100%.");
    collect_formula(catalog, prompt_percentage, |err| {
        println!("{}", err);
        prompt_yes_no("Re-enter the formula?", true)
    })
}

/// Read one value per catalog ingredient until the total is valid.
///
/// `retry` sees each total error and decides whether to start over; when it
/// declines, the error is returned.
pub fn collect_formula<R, A>(
    catalog: &IngredientCatalog,
    mut read: R,
    mut retry: A,
) -> Result<Formula>
where
    R: FnMut(&str, f64) -> Result<f64>,
    A: FnMut(&FormulaError) -> Result<bool>,
{
    loop {
        let mut formula = Formula::new();
        for name in catalog.names() {
            let value = read(name, formula.total())?;
            formula.set(name, value);
        }

        match formula.validate_total() {
            Ok(()) => return Ok(formula),
            Err(e) => {
                if !retry(&e)? {
                    return Err(e);
                }
            }
        }
    }
}

/// Prompt for the name to save a version under.
pub fn prompt_version_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Version name")
        .default(DEFAULT_VERSION_NAME.to_string())
        .interact_text()?;

    let name = input.trim();
    if name.is_empty() {
        return Err(FormulaError::InvalidInput(
            "Version name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Let the user pick saved versions to compare.
pub fn prompt_select_versions(names: &[&str]) -> Result<Vec<String>> {
    let picked = MultiSelect::new()
        .with_prompt("Select versions to compare (space to toggle)")
        .items(names)
        .interact()?;

    Ok(picked.into_iter().map(|i| names[i].to_string()).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn two_item_catalog() -> IngredientCatalog {
        IngredientCatalog::from_ingredients(vec![
            Ingredient::new("Flour", 357.0, 9.8, 1.0, 76.0, 0.3, 4.0),
            Ingredient::new("Water", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_collect_formula_reenters_after_bad_total() {
        let catalog = two_item_catalog();
        let mut answers = vec![60.0, 30.0, 60.0, 40.0].into_iter();
        let mut reported = Vec::new();

        let formula = collect_formula(
            &catalog,
            |_, _| Ok(answers.next().unwrap()),
            |err| {
                reported.push(err.to_string());
                Ok(true)
            },
        )
        .unwrap();

        assert_eq!(formula.get("Flour"), 60.0);
        assert_eq!(formula.get("Water"), 40.0);
        assert_eq!(reported.len(), 1);
        assert!(reported[0].contains("90.00%"));
        assert!(reported[0].contains("-10.00%"));
    }

    #[test]
    fn test_collect_formula_gives_up_when_declined() {
        let catalog = two_item_catalog();
        let result = collect_formula(&catalog, |_, _| Ok(10.0), |_| Ok(false));
        assert!(matches!(result, Err(FormulaError::InvalidTotal { total }) if total == 20.0));
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("12.5").unwrap(), 12.5);
        assert_eq!(parse_percentage(" 0.2% ").unwrap(), 0.2);
        assert!(parse_percentage("abc").is_err());
        assert!(parse_percentage("101").is_err());
        assert!(parse_percentage("-1").is_err());
    }
}
