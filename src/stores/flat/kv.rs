//! The string-keyed blob store that backs the flat backend.
//!
//! The contract is deliberately tiny so it can sit on top of whatever the
//! host platform provides: get a string by key, overwrite a string by key,
//! and drop everything.

use std::{collections::HashMap, fs, io, path::PathBuf};

use crate::Error;

/// A string-keyed store of JSON-encoded collection blobs.
pub trait KeyValue: Send {
    /// Get the value stored under `key`, or `None` if the key has never been
    /// set.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;

    /// Remove every key.
    fn clear(&mut self) -> Result<(), Error>;
}

/// Stores each key as a file named `<key>.json` under one directory.
#[derive(Debug)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Use `dir` for storage, creating the directory if needed.
    ///
    /// # Errors
    /// Returns [Error::Initialization] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|error| Error::Initialization(error.to_string()))?;

        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        fs::write(self.path_for(key), value)?;

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|extension| extension == "json") {
                fs::remove_file(path)?;
            }
        }

        Ok(())
    }
}

/// An in-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.entries.clear();

        Ok(())
    }
}

#[cfg(test)]
mod kv_tests {
    use super::{FileKv, KeyValue, MemoryKv};

    #[test]
    fn memory_kv_get_returns_none_for_unset_key() {
        let kv = MemoryKv::new();

        assert_eq!(kv.get("categories").unwrap(), None);
    }

    #[test]
    fn memory_kv_set_then_get_round_trips() {
        let mut kv = MemoryKv::new();

        kv.set("categories", "[]").unwrap();

        assert_eq!(kv.get("categories").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_kv_clear_removes_every_key() {
        let mut kv = MemoryKv::new();
        kv.set("categories", "[]").unwrap();
        kv.set("debts", "[]").unwrap();

        kv.clear().unwrap();

        assert_eq!(kv.get("categories").unwrap(), None);
        assert_eq!(kv.get("debts").unwrap(), None);
    }

    #[test]
    fn file_kv_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::open(dir.path()).unwrap();

        kv.set("categories", "[{\"id\":1}]").unwrap();

        assert_eq!(
            kv.get("categories").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn file_kv_get_returns_none_for_unset_key() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        assert_eq!(kv.get("missing").unwrap(), None);
    }

    #[test]
    fn file_kv_clear_removes_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::open(dir.path()).unwrap();
        kv.set("categories", "[]").unwrap();
        kv.set("transactions", "[]").unwrap();

        kv.clear().unwrap();

        assert_eq!(kv.get("categories").unwrap(), None);
        assert_eq!(kv.get("transactions").unwrap(), None);
    }

    #[test]
    fn file_kv_survives_reopening_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut kv = FileKv::open(dir.path()).unwrap();
            kv.set("debts", "[{\"id\":2}]").unwrap();
        }

        let kv = FileKv::open(dir.path()).unwrap();

        assert_eq!(kv.get("debts").unwrap().as_deref(), Some("[{\"id\":2}]"));
    }
}
