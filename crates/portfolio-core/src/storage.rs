//! Preference persistence.
//!
//! The only thing the presentation layer remembers between runs is the theme,
//! stored under [`THEME_KEY`]. The desktop shell uses [`RedbPreferences`];
//! tests use [`MemoryPreferences`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortfolioResult;

/// Key under which the theme preference is stored
pub const THEME_KEY: &str = "portfolio-theme";

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// String key/value preference store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()>;
}

/// Preferences persisted in a redb file.
#[derive(Clone)]
pub struct RedbPreferences {
    db: Arc<RwLock<Database>>,
}

impl RedbPreferences {
    /// Open or create the preference database at `path`, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl PreferenceStore for RedbPreferences {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preferences. Clones share the same map, so handing a clone to a
/// second app instance simulates a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, e.g. a stale or hand-edited preference.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values.lock().insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_preferences() -> (RedbPreferences, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");
        let prefs = RedbPreferences::open(&db_path).unwrap();
        (prefs, temp_dir)
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/prefs.redb");
        assert!(RedbPreferences::open(&db_path).is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_missing_key_is_none() {
        let (prefs, _temp) = create_test_preferences();
        assert_eq!(prefs.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (mut prefs, _temp) = create_test_preferences();
        prefs.set(THEME_KEY, "dark").unwrap();
        prefs.set(THEME_KEY, "light").unwrap();
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");
        {
            let mut prefs = RedbPreferences::open(&db_path).unwrap();
            prefs.set(THEME_KEY, "dark").unwrap();
        }
        let prefs = RedbPreferences::open(&db_path).unwrap();
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_clones_share_values() {
        let mut prefs = MemoryPreferences::new();
        let reloaded = prefs.clone();
        prefs.set(THEME_KEY, "dark").unwrap();
        assert_eq!(reloaded.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
