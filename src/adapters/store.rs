use crate::domain::ports::KeyValueStore;
use crate::utils::error::{Result, TogglerError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store kept in memory. It can be marked unavailable to mimic a browser
/// with storage disabled.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    values: BTreeMap<String, String>,
    available: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            available: true,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            values: BTreeMap::new(),
            available: false,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.available {
            return Err(TogglerError::StoreUnavailable {
                message: "storage is disabled".to_string(),
            });
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.available {
            return Err(TogglerError::StoreUnavailable {
                message: "storage is disabled".to_string(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat JSON object on disk, so separate runs see each
/// other's records the way page loads share local storage.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    unavailable: Option<String>,
}

impl JsonFileStore {
    /// Opens the file, or starts empty when it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened state file {} ({} records)", path.display(), values.len());
        Ok(Self {
            path,
            values,
            unavailable: None,
        })
    }

    /// Like [`open`](Self::open), but a broken file yields a store that
    /// refuses every read and write, and the file is left as it is.
    pub fn open_or_unavailable<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    "State file {} is unusable, state will not be remembered: {}",
                    path.display(),
                    e
                );
                Self {
                    path: path.to_path_buf(),
                    values: BTreeMap::new(),
                    unavailable: Some(e.to_string()),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_available(&self) -> bool {
        self.unavailable.is_none()
    }

    fn check_available(&self) -> Result<()> {
        match &self.unavailable {
            Some(reason) => Err(TogglerError::StoreUnavailable {
                message: format!("{}: {}", self.path.display(), reason),
            }),
            None => Ok(()),
        }
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
