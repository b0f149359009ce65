//! JSON key-value store
//!
//! One JSON object of string keys and string values in a single file.
//! Contents are read once on open and held in memory; every mutation is
//! written through via a temp file + rename so a crash mid-write never
//! truncates the store.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// String key-value persistence backed by one JSON file
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl LocalStore {
    /// Open a store file; a missing file opens as an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file missing, starting empty");
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a key and persist immediately
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.into(), value.into());
        self.persist()
    }

    /// Remove a key; persists only when something was actually removed
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("state.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn values_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = LocalStore::open(&path).unwrap();
        store.set("liked_tracks", "[]").unwrap();
        store.set("theme", "dark").unwrap();
        drop(store);

        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.get("liked_tracks"), Some("[]"));
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = LocalStore::open(&path).unwrap();
        store.set("key", "value").unwrap();
        store.remove("key").unwrap();
        drop(store);

        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(LocalStore::open(&path).is_err());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/state.json");

        let mut store = LocalStore::open(&path).unwrap();
        store.set("key", "value").unwrap();

        assert!(path.exists());
    }
}
