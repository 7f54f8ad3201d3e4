//! Key-value session storage

use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{error::ProviderError, session::ProviderResponse};

/// Key under which the provider session snapshot is persisted
pub const SESSION_STORAGE_KEY: &str = "thinkbucksSession";

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ProviderError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ProviderError>;
    fn remove(&self, key: &str) -> Result<(), ProviderError>;
}

/// Read the persisted session snapshot. A corrupt entry reads as absent.
pub fn load_session(storage: &dyn SessionStorage) -> Result<Option<ProviderResponse>, ProviderError> {
    let Some(raw) = storage.get(SESSION_STORAGE_KEY)? else {
        return Ok(None);
    };
    match ProviderResponse::from_json(&raw) {
        Ok(response) => Ok(Some(response)),
        Err(e) => {
            log::warn!("Discarding unreadable stored session: {e}");
            Ok(None)
        }
    }
}

pub fn save_session(
    storage: &dyn SessionStorage,
    response: &ProviderResponse,
) -> Result<(), ProviderError> {
    storage.set(SESSION_STORAGE_KEY, &response.to_json()?)
}

/// JSON object on disk, rewritten on every change
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, ProviderError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(storage_error)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&raw).map_err(storage_error)
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), ProviderError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(storage_error)?;
        fs::write(&self.path, raw).map_err(storage_error)
    }

    fn modify(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), ProviderError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ProviderError::Storage("storage lock poisoned".into()))?;
        let mut entries = self.read_all()?;
        f(&mut entries);
        self.write_all(&entries)
    }
}

fn storage_error(e: impl Display) -> ProviderError {
    ProviderError::Storage(e.to_string())
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), ProviderError> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ProviderError> {
        let entries = self.entries.lock().map_err(storage_error)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        let mut entries = self.entries.lock().map_err(storage_error)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ProviderError> {
        let mut entries = self.entries.lock().map_err(storage_error)?;
        entries.remove(key);
        Ok(())
    }
}
