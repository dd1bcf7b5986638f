mod comparison;
mod memory;
mod persistence;

use std::collections::BTreeMap;

use crate::error::{FormulaError, Result};
use crate::models::FormulaSnapshot;

pub use comparison::{compare_versions, Comparison};
pub use memory::MemoryStore;
pub use persistence::{load_formula, load_ingredients, JsonFileStore};

/// Keyed storage of named snapshots.
///
/// `put` replaces any snapshot already stored under the same name.
pub trait VersionStore {
    fn put(&mut self, snapshot: FormulaSnapshot) -> Result<()>;

    fn get(&self, name: &str) -> Option<&FormulaSnapshot>;

    /// All snapshots, ordered by name.
    fn get_all(&self) -> &BTreeMap<String, FormulaSnapshot>;

    /// Like `get`, but a missing name is an error.
    fn require(&self, name: &str) -> Result<&FormulaSnapshot> {
        self.get(name)
            .ok_or_else(|| FormulaError::VersionNotFound(name.to_string()))
    }

    fn names(&self) -> Vec<&str> {
        self.get_all().keys().map(String::as_str).collect()
    }

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}
