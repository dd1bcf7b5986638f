use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::FormulaSnapshot;
use crate::store::VersionStore;

/// Snapshots kept for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    versions: BTreeMap<String, FormulaSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(versions: BTreeMap<String, FormulaSnapshot>) -> Self {
        Self { versions }
    }
}

impl VersionStore for MemoryStore {
    fn put(&mut self, snapshot: FormulaSnapshot) -> Result<()> {
        self.versions.insert(snapshot.name.clone(), snapshot);
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&FormulaSnapshot> {
        self.versions.get(name)
    }

    fn get_all(&self) -> &BTreeMap<String, FormulaSnapshot> {
        &self.versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;
    use crate::models::{Formula, NutritionResult, SimulationResult};

    fn snapshot(name: &str, energy: f64) -> FormulaSnapshot {
        FormulaSnapshot::new(
            name,
            SimulationResult {
                formula: Formula::new().with("統一麵粉", 100.0),
                nutrition: NutritionResult {
                    energy,
                    ..Default::default()
                },
                feedback: None,
                suggestion: None,
            },
        )
    }

    #[test]
    fn test_put_replaces_wholesale() {
        let mut store = MemoryStore::new();
        store.put(snapshot("v1", 100.0)).unwrap();
        store.put(snapshot("v1", 120.0)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("v1").unwrap().nutrition().energy, 120.0);
    }

    #[test]
    fn test_get_all_sorted() {
        let mut store = MemoryStore::new();
        store.put(snapshot("v2", 1.0)).unwrap();
        store.put(snapshot("v1", 2.0)).unwrap();
        assert_eq!(store.names(), vec!["v1", "v2"]);
    }

    #[test]
    fn test_require_missing() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(matches!(
            store.require("v9"),
            Err(FormulaError::VersionNotFound(name)) if name == "v9"
        ));
    }
}
