//! Inventory asset domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Inventory code (six digits starting with 22), not a UUID.
    pub id: String,
    pub client_id: Uuid,
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub last_maintenance: Option<DateTime<Utc>>,
}
