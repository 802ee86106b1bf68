use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::prelude::{Error, Result};

pub mod keys {
    pub const JOBS: &str = "facultyJobs_jobs";
    pub const USERS: &str = "facultyJobs_users";
    pub const CONFIG: &str = "facultyJobs_config";
    pub const CURRENT_USER: &str = "facultyJobs_currentUser";
    pub const SAVED_JOBS: &str = "facultyJobs_savedJobs";
}

pub trait KvStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All keys in a single JSON object file. Every write rewrites the file
/// through a sibling temp file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!("opened store {:?} with {} keys", &path, entries.len());
        Ok(JsonFileStore { path, entries })
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

pub fn get_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn set_json<T: Serialize + ?Sized>(store: &mut dyn KvStore, key: &str, value: &T) -> Result<()> {
    store.set(key, serde_json::to_string(value)?)
}

pub fn get_json_or_skip<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    match get_json(store, key) {
        Err(Error::Json(e)) => {
            tracing::warn!("ignoring undecodable value under {}: {}", key, e);
            Ok(None)
        }
        other => other,
    }
}

pub fn get_records<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<Vec<T>>> {
    let Some(values) = get_json_or_skip::<Vec<serde_json::Value>>(store, key)? else {
        return Ok(None);
    };
    let records = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("skipping stored record under {}: {}", key, e);
                None
            }
        })
        .collect();
    Ok(Some(records))
}
