use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::IngredientCatalog;
use crate::error::Result;
use crate::models::{Formula, FormulaSnapshot, Ingredient};
use crate::store::{MemoryStore, VersionStore};

/// Load ingredients from a JSON array.
pub fn load_ingredients<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a formula from a JSON object of `name: percent`.
///
/// Catalog ingredients missing from the file are filled in at 0%.
pub fn load_formula<P: AsRef<Path>>(path: P, catalog: &IngredientCatalog) -> Result<Formula> {
    let content = fs::read_to_string(path)?;
    let given: Formula = serde_json::from_str(&content)?;

    catalog.check_formula(&given)?;
    given.validate_ranges()?;

    let mut formula = catalog.empty_formula();
    for (name, percent) in given.iter() {
        formula.set(name, percent);
    }
    Ok(formula)
}

/// Snapshots persisted as a JSON array, rewritten on every save.
///
/// Duplicate names in the file resolve to the last occurrence.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open a store file; a missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut versions = BTreeMap::new();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let snapshots: Vec<FormulaSnapshot> = serde_json::from_str(&content)?;
            for snapshot in snapshots {
                versions.insert(snapshot.name.clone(), snapshot);
            }
        }

        Ok(Self {
            path,
            inner: MemoryStore::from_map(versions),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let snapshots: Vec<&FormulaSnapshot> = self.inner.get_all().values().collect();
        let json = serde_json::to_string_pretty(&snapshots)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl VersionStore for JsonFileStore {
    fn put(&mut self, snapshot: FormulaSnapshot) -> Result<()> {
        let name = snapshot.name.clone();
        self.inner.put(snapshot)?;
        self.flush()?;
        info!(version = %name, path = %self.path.display(), "version saved");
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&FormulaSnapshot> {
        self.inner.get(name)
    }

    fn get_all(&self) -> &BTreeMap<String, FormulaSnapshot> {
        self.inner.get_all()
    }
}
