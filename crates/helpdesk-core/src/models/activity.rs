//! Activity domain model.
//!
//! Activities are the append-only log attached to a ticket: comments,
//! status transitions and attachment events. Immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRef;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    Comment,
    StatusChange,
    Attachment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub author: UserRef,
    pub content: String,
    pub kind: ActivityKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    pub ticket_id: Uuid,
    pub author: UserRef,
    pub content: String,
    pub kind: ActivityKind,
}
