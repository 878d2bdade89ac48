//! User domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Agent,
}

/// Per-user capability flags. View flags gate whole application views;
/// the remaining flags gate individual actions inside them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permissions {
    pub can_view_dashboard: bool,
    pub can_view_tickets: bool,
    pub can_view_assets: bool,
    pub can_view_admin: bool,
    pub can_edit_all_fields: bool,
    pub can_delete_tickets: bool,
    pub can_manage_users: bool,
}

impl Permissions {
    /// Everything enabled — the administrator baseline.
    pub fn all() -> Self {
        Self {
            can_view_dashboard: true,
            can_view_tickets: true,
            can_view_assets: true,
            can_view_admin: true,
            can_edit_all_fields: true,
            can_delete_tickets: true,
            can_manage_users: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub permissions: Permissions,
}

impl User {
    /// Denormalized id + name pair stamped onto tickets and activities.
    pub fn user_ref(&self) -> UserRef {
        UserRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Who touched a record last, or who authored an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub permissions: Option<Permissions>,
}
