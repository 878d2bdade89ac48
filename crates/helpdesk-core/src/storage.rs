//! Storage-adapter contract.
//!
//! Collections are persisted wholesale as JSON values under fixed keys:
//! a read returns the full collection (or a default when the key is
//! absent) and a write replaces it entirely. `set_many` exists so that
//! a mutation touching two collections (a ticket and its log entry)
//! lands as one atomic application.
//!
//! All operations are async. Implementations live in `helpdesk-store`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HelpdeskResult;

pub trait Storage: Send + Sync {
    /// Read the value under `key`, or `None` when the key is absent.
    fn get<T>(&self, key: &str) -> impl Future<Output = HelpdeskResult<Option<T>>> + Send
    where
        T: DeserializeOwned + Send;

    /// Replace the value under `key` wholesale.
    fn set<T>(&self, key: &str, value: &T) -> impl Future<Output = HelpdeskResult<()>> + Send
    where
        T: Serialize + Sync + ?Sized;

    /// Replace several keys in one atomic application: either every
    /// entry becomes visible or none does.
    fn set_many(
        &self,
        entries: Vec<(String, Value)>,
    ) -> impl Future<Output = HelpdeskResult<()>> + Send;

    /// Drop `key` entirely. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> impl Future<Output = HelpdeskResult<()>> + Send;

    /// Read `key`, falling back to `default` when the key is absent.
    fn get_or<T>(&self, key: &str, default: T) -> impl Future<Output = HelpdeskResult<T>> + Send
    where
        T: DeserializeOwned + Send,
        Self: Sized,
    {
        async move { Ok(self.get(key).await?.unwrap_or(default)) }
    }
}
