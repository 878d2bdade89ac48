//! JSON-file snapshot store.
//!
//! The whole key space lives in one JSON document. Every write
//! replaces the document through a temp-file + rename, so a
//! multi-key [`set_many`](Storage::set_many) lands atomically — a
//! reader never observes half of it. Concurrent writers are
//! last-write-wins; the flush lock only keeps snapshots from
//! interleaving on disk.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use helpdesk_core::error::HelpdeskResult;
use helpdesk_core::storage::Storage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::error::StoreError;

#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, Value>>>,
    flush: Arc<tokio::sync::Mutex<()>>,
}

impl JsonFileStore {
    /// Open a snapshot file, loading its contents if it exists.
    ///
    /// A missing file is an empty store; the file is created on the
    /// first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries: HashMap<String, Value> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %path.display(),
            keys = entries.len(),
            "Opened helpdesk data snapshot"
        );

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
            flush: Arc::new(tokio::sync::Mutex::new(())),
        })
    }

    /// Write the full document to disk via temp-file + rename.
    async fn persist(&self) -> Result<(), StoreError> {
        let _guard = self.flush.lock().await;
        let snapshot = self
            .entries
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .clone();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl Storage for JsonFileStore {
    async fn get<T>(&self, key: &str) -> HelpdeskResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let value = {
            let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
            entries.get(key).cloned()
        };
        match value {
            Some(value) => {
                let value = serde_json::from_value(value).map_err(StoreError::from)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set<T>(&self, key: &str, value: &T) -> HelpdeskResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(StoreError::from)?;
        {
            let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
            entries.insert(key.to_string(), value);
        }
        self.persist().await?;
        Ok(())
    }

    async fn set_many(&self, new_entries: Vec<(String, Value)>) -> HelpdeskResult<()> {
        {
            let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
            for (key, value) in new_entries {
                entries.insert(key, value);
            }
        }
        self.persist().await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> HelpdeskResult<()> {
        {
            let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
            entries.remove(key);
        }
        self.persist().await?;
        Ok(())
    }
}
