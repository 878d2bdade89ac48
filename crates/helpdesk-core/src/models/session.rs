//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The active session holds a weak, by-id reference to the signed-in
/// user. Resolution is always a fresh lookup against the users
/// collection, so permission updates are visible immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: Uuid,
    pub signed_in_at: DateTime<Utc>,
}
