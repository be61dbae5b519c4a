use crate::errors::StorageError;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::error;

/// Small string key-value store, the local-storage side of the dashboard.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, loaded once and rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable one is logged and also starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                error!(path = %path.display(), "ignoring corrupt preferences: {err}");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!(path = %path.display(), "cannot read preferences: {err}");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(entries)?).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Memory only changes once the file has been written.
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await?;
        self.entries = entries;
        Ok(())
    }
}
