//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use helpdesk_core::error::HelpdeskResult;
use helpdesk_core::storage::Storage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

/// Process-local store. Cloning shares the same underlying map, so a
/// clone handed to another task sees the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    async fn get<T>(&self, key: &str) -> HelpdeskResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        match entries.get(key) {
            Some(value) => {
                let value = serde_json::from_value(value.clone()).map_err(StoreError::from)?;
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
        self.entries
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(String, Value)>) -> HelpdeskResult<()> {
        let mut map = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        for (key, value) in entries {
            map.insert(key, value);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> HelpdeskResult<()> {
        self.entries
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .remove(key);
        Ok(())
    }
}
