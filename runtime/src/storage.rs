//! Durable key-value storage.
//!
//! The store writes one snapshot under one key and overwrites it wholesale on
//! every persist effect. Two backends are provided:
//!
//! - [`MemoryStorage`]: a shared in-process map, for tests and ephemeral runs
//! - [`FileStorage`]: one file per key inside a directory
//!
//! # Example
//!
//! ```
//! use tasklist_runtime::storage::{KeyValueStorage, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! storage.set("todos", "[]").unwrap();
//! assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
//! assert_eq!(storage.get("other").unwrap(), None);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Errors reported by storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// The underlying file system call failed
    #[error("I/O error on key '{key}': {source}")]
    Io {
        /// Key being read or written
        key: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The key cannot be mapped onto the backend
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// The backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable string-to-string map
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value was not stored.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory storage
///
/// Clones share the same map, so a test can keep a handle after moving one
/// into a store and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    /// Create an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls across all clones
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

/// Directory-backed storage, one `<key>.json` file per key
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the key files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;

        tracing::trace!(path = %path.display(), "Wrote storage file");
        Ok(())
    }
}
