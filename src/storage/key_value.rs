use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AtelierError, Result};

const ATELIER_DIR: &str = ".atelier";

/// Key holding the catalog as read by the admin editor.
pub const ITEMS_KEY: &str = "portfolioItems";

/// Legacy key read by the public site. Written in lockstep with
/// [`ITEMS_KEY`] so the two views never diverge.
pub const DATA_KEY: &str = "portfolioData";

/// Plain-text key-value persistence.
///
/// Values are opaque strings; serialization happens above this layer so
/// tests can substitute [`MemoryStorage`] for the on-disk store.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// One UTF-8 text file per key under `.atelier/`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Initialize a new atelier workspace
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(ATELIER_DIR);

        if dir.exists() {
            return Err(AtelierError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    /// Open an existing atelier workspace
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(ATELIER_DIR);

        if !dir.exists() {
            return Err(AtelierError::NotInitialized);
        }

        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory storage fake for tests.
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::init(tmp.path()).unwrap();

        assert_eq!(storage.get("portfolioItems").unwrap(), None);

        storage.set("portfolioItems", "[]").unwrap();
        assert_eq!(storage.get("portfolioItems").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn init_twice_fails() {
        let tmp = TempDir::new().unwrap();
        FileStorage::init(tmp.path()).unwrap();

        assert!(matches!(
            FileStorage::init(tmp.path()),
            Err(AtelierError::AlreadyInitialized)
        ));
    }

    #[test]
    fn open_without_init_fails() {
        let tmp = TempDir::new().unwrap();

        assert!(matches!(
            FileStorage::open(tmp.path()),
            Err(AtelierError::NotInitialized)
        ));
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.get("missing").unwrap(), None);
    }
}
