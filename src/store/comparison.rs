use std::path::Path;

use crate::error::Result;
use crate::models::{FormulaSnapshot, Nutrient};
use crate::store::VersionStore;

/// Side-by-side nutrition of selected versions.
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    pub versions: Vec<&'a FormulaSnapshot>,
}

impl<'a> Comparison<'a> {
    pub fn names(&self) -> Vec<&str> {
        self.versions.iter().map(|v| v.name.as_str()).collect()
    }

    /// One row per nutrient, one value per version, in selection order.
    pub fn rows(&self) -> Vec<(Nutrient, Vec<f64>)> {
        Nutrient::ALL
            .into_iter()
            .map(|n| {
                let values = self.versions.iter().map(|v| v.nutrition().get(n)).collect();
                (n, values)
            })
            .collect()
    }

    /// Write the comparison table to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        let mut header = vec!["nutrient".to_string(), "unit".to_string()];
        header.extend(self.names().into_iter().map(String::from));
        wtr.write_record(&header)?;

        for (nutrient, values) in self.rows() {
            let mut record = vec![nutrient.label().to_string(), nutrient.unit().to_string()];
            record.extend(values.iter().map(|v| format!("{:.2}", v)));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Collect the named versions in the order given.
///
/// Fails on the first name the store does not hold. Duplicate names are kept once.
pub fn compare_versions<'a, S: VersionStore + ?Sized>(
    store: &'a S,
    names: &[String],
) -> Result<Comparison<'a>> {
    let mut versions: Vec<&'a FormulaSnapshot> = Vec::with_capacity(names.len());
    for name in names {
        let snapshot = store.require(name)?;
        if !versions.iter().any(|v| v.name == snapshot.name) {
            versions.push(snapshot);
        }
    }
    Ok(Comparison { versions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;
    use crate::models::{Formula, NutritionResult, SimulationResult};
    use crate::store::MemoryStore;

    fn store_with(names: &[(&str, f64)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (name, sugar) in names {
            store
                .put(FormulaSnapshot::new(
                    name,
                    SimulationResult {
                        formula: Formula::new(),
                        nutrition: NutritionResult {
                            sugar: *sugar,
                            ..Default::default()
                        },
                        feedback: None,
                        suggestion: None,
                    },
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_rows_follow_selection_order() {
        let store = store_with(&[("a", 1.0), ("b", 2.0)]);
        let cmp = compare_versions(&store, &["b".to_string(), "a".to_string()]).unwrap();
        assert_eq!(cmp.names(), vec!["b", "a"]);

        let rows = cmp.rows();
        assert_eq!(rows.len(), 7);
        let (_, sugar) = rows.iter().find(|(n, _)| *n == Nutrient::Sugar).unwrap();
        assert_eq!(sugar, &vec![2.0, 1.0]);
    }

    #[test]
    fn test_missing_version() {
        let store = store_with(&[("a", 1.0)]);
        let err = compare_versions(&store, &["a".to_string(), "z".to_string()]).unwrap_err();
        assert!(matches!(err, FormulaError::VersionNotFound(name) if name == "z"));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let store = store_with(&[("a", 1.0)]);
        let cmp = compare_versions(&store, &["a".to_string(), "a".to_string()]).unwrap();
        assert_eq!(cmp.versions.len(), 1);
    }
}
