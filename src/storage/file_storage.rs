use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::storage::{Storage, StorageError};

/// A `DashMap` mirrored to a flat JSON object on disk.
///
/// Every `save` rewrites the whole file. The map stays authoritative for the rest of the
/// run even when the write fails.
pub struct FileStorage {
    path: PathBuf,
    entries: Arc<DashMap<String, String>>
}

impl FileStorage {
    /// Opens the store at `path`, starting empty when the file does not exist yet.
    ///
    /// # Errors
    /// Returns `StorageError` if the file exists but cannot be read or is not a JSON object
    /// of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str::<BTreeMap<String, String>>(&contents)
                .map_err(|error| StorageError::parse(path.clone(), error))?,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("No state file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(error) => return Err(StorageError::read(path, error))
        };

        Ok(Self {
            path,
            entries: Arc::new(entries.into_iter().collect())
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let snapshot: BTreeMap<String, String> = self.entries.iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let contents = serde_json::to_string_pretty(&snapshot)?;

        fs::write(&self.path, contents).map_err(|error| StorageError::write(self.path.clone(), error))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn save(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);

        if let Err(error) = self.persist() {
            warn!("State not persisted: {error}");
        }
    }
}
