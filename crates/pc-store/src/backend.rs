//! Byte-level persistence backends.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// File name prefix marking a timer's history inside a storage root.
pub const FILE_PREFIX: &str = "pc_";

/// Keyed byte storage for timer histories.
pub trait Backend {
    /// Returns the bytes stored under `key`, or `StoreError::NotFound`.
    fn read(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Replaces the value under `key` in a single atomic step.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Removes `key`, or fails with `StoreError::NotFound`.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// All stored keys.
    fn list_keys(&self) -> Result<BTreeSet<String>, StoreError>;

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.list_keys()?.contains(key))
    }
}

/// Stores each timer as a `pc_<name>` file under a root directory.
#[derive(Debug, Clone)]
pub struct DirBackend {
    root: PathBuf,
}

impl DirBackend {
    /// Opens a storage root, creating the directory if necessary.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(root.display().to_string(), e))?;
        Ok(Self { root })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{FILE_PREFIX}{key}"))
    }
}

impl Backend for DirBackend {
    fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        match fs::read(self.path(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                name: key.to_string(),
            }),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        // Write beside the target so the final rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| StoreError::io(key, e))?;
        tmp.write_all(bytes).map_err(|e| StoreError::io(key, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(key, e))?;
        tmp.persist(self.path(key))
            .map_err(|e| StoreError::io(key, e.error))?;
        tracing::debug!(key, bytes = bytes.len(), "wrote history");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                name: key.to_string(),
            }),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn list_keys(&self) -> Result<BTreeSet<String>, StoreError> {
        let root_key = || self.root.display().to_string();
        let mut keys = BTreeSet::new();
        for dir_entry in fs::read_dir(&self.root).map_err(|e| StoreError::io(root_key(), e))? {
            let dir_entry = dir_entry.map_err(|e| StoreError::io(root_key(), e))?;
            if !dir_entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let Ok(file_name) = dir_entry.file_name().into_string() else {
                continue;
            };
            if let Some(key) = file_name.strip_prefix(FILE_PREFIX) {
                keys.insert(key.to_string());
            }
        }
        Ok(keys)
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path(key).is_file())
    }
}

/// In-memory storage, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: BTreeMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: key.to_string(),
            })
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values
            .remove(key)
            .map(drop)
            .ok_or_else(|| StoreError::NotFound {
                name: key.to_string(),
            })
    }

    fn list_keys(&self) -> Result<BTreeSet<String>, StoreError> {
        Ok(self.values.keys().cloned().collect())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.values.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_backend_roundtrips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DirBackend::open(dir.path()).unwrap();

        backend.write("proj", b"[]").unwrap();
        assert_eq!(backend.read("proj").unwrap(), b"[]");
        assert!(dir.path().join("pc_proj").is_file());
    }

    #[test]
    fn dir_backend_overwrites_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DirBackend::open(dir.path()).unwrap();

        backend.write("proj", b"first value").unwrap();
        backend.write("proj", b"2").unwrap();
        assert_eq!(backend.read("proj").unwrap(), b"2");
    }

    #[test]
    fn dir_backend_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("clocks");
        let backend = DirBackend::open(&root).unwrap();
        assert!(root.is_dir());
        assert!(backend.list_keys().unwrap().is_empty());
    }

    #[test]
    fn dir_backend_missing_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DirBackend::open(dir.path()).unwrap();
        assert!(backend.read("nope").unwrap_err().is_not_found());
        assert!(backend.remove("nope").unwrap_err().is_not_found());
        assert!(!backend.contains("nope").unwrap());
    }

    #[test]
    fn dir_backend_lists_only_prefixed_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DirBackend::open(dir.path()).unwrap();
        backend.write("b", b"[]").unwrap();
        backend.write("a", b"[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "unrelated").unwrap();
        fs::create_dir(dir.path().join("pc_dir")).unwrap();

        let keys: Vec<_> = backend.list_keys().unwrap().into_iter().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn dir_backend_remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DirBackend::open(dir.path()).unwrap();
        backend.write("proj", b"[]").unwrap();
        backend.remove("proj").unwrap();
        assert!(!dir.path().join("pc_proj").exists());
        assert!(backend.read("proj").unwrap_err().is_not_found());
    }

    #[test]
    fn memory_backend_behaves_like_dir_backend() {
        let mut backend = MemoryBackend::new();
        assert!(backend.read("proj").unwrap_err().is_not_found());
        backend.write("proj", b"[]").unwrap();
        assert!(backend.contains("proj").unwrap());
        assert_eq!(backend.list_keys().unwrap().len(), 1);
        backend.remove("proj").unwrap();
        assert!(backend.remove("proj").unwrap_err().is_not_found());
    }
}
