//! Domain API facade — all mutations go through here.
//!
//! Every mutating call writes the full affected collection back to the
//! store. Writes that touch two collections (a ticket plus its log
//! entry) go through [`Storage::set_many`] so they land atomically.
//! Reads of reference collections fall back to the seed catalog when
//! the key has never been written.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use helpdesk_core::error::{HelpdeskError, HelpdeskResult};
use helpdesk_core::models::activity::{Activity, ActivityKind, NewActivity};
use helpdesk_core::models::asset::Asset;
use helpdesk_core::models::client::Client;
use helpdesk_core::models::session::SessionRecord;
use helpdesk_core::models::ticket::{NewTicket, Ticket, TicketPatch};
use helpdesk_core::models::user::{UpdateUser, User};
use helpdesk_core::storage::Storage;

use crate::seed;

/// Fixed storage keys, one per collection.
mod keys {
    pub const USERS: &str = "helpdesk_users";
    pub const CLIENTS: &str = "helpdesk_clients";
    pub const ASSETS: &str = "helpdesk_assets";
    pub const TICKETS: &str = "helpdesk_tickets";
    pub const ACTIVITIES: &str = "helpdesk_activities";
    pub const SESSION: &str = "helpdesk_session";
}

pub struct Helpdesk<S: Storage> {
    store: S,
}

impl<S: Storage> Helpdesk<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // -------------------------------------------------------------------
    // Users & session
    // -------------------------------------------------------------------

    pub async fn list_users(&self) -> HelpdeskResult<Vec<User>> {
        self.store.get_or(keys::USERS, seed::initial_users()).await
    }

    pub async fn user_by_id(&self, id: Uuid) -> HelpdeskResult<Option<User>> {
        Ok(self.list_users().await?.into_iter().find(|u| u.id == id))
    }

    /// Merge `update` into the stored user. Only provided fields
    /// change. The session keeps only the user's id, so an update to
    /// the signed-in user is visible through [`current_session`]
    /// without further bookkeeping.
    ///
    /// [`current_session`]: Helpdesk::current_session
    pub async fn update_user(&self, id: Uuid, update: UpdateUser) -> HelpdeskResult<User> {
        let mut users = self.list_users().await?;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| HelpdeskError::not_found("user", id))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(permissions) = update.permissions {
            user.permissions = permissions;
        }
        let updated = user.clone();

        self.store.set(keys::USERS, &users).await?;
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    /// Sign in by email, matched case-insensitively. On success the
    /// matched user becomes the active session.
    pub async fn login(&self, email: &str) -> HelpdeskResult<User> {
        let user = self
            .list_users()
            .await?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .ok_or(HelpdeskError::InvalidCredentials)?;

        let record = SessionRecord {
            user_id: user.id,
            signed_in_at: Utc::now(),
        };
        self.store.set(keys::SESSION, &record).await?;
        info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    pub async fn logout(&self) -> HelpdeskResult<()> {
        self.store.remove(keys::SESSION).await
    }

    /// Resolve the active session to its user. A dangling user id
    /// yields `None`.
    pub async fn current_session(&self) -> HelpdeskResult<Option<User>> {
        let Some(record) = self.store.get::<SessionRecord>(keys::SESSION).await? else {
            return Ok(None);
        };
        self.user_by_id(record.user_id).await
    }

    // -------------------------------------------------------------------
    // Reference data
    // -------------------------------------------------------------------

    pub async fn list_clients(&self) -> HelpdeskResult<Vec<Client>> {
        self.store
            .get_or(keys::CLIENTS, seed::initial_clients())
            .await
    }

    pub async fn list_assets(&self) -> HelpdeskResult<Vec<Asset>> {
        self.store.get_or(keys::ASSETS, seed::initial_assets()).await
    }

    // -------------------------------------------------------------------
    // Tickets
    // -------------------------------------------------------------------

    pub async fn list_tickets(&self) -> HelpdeskResult<Vec<Ticket>> {
        self.store.get_or(keys::TICKETS, Vec::new()).await
    }

    /// Create a ticket and its "opened" log entry in one atomic write.
    pub async fn create_ticket(&self, data: NewTicket, acting: &User) -> HelpdeskResult<Ticket> {
        let mut tickets = self.list_tickets().await?;
        let mut activities = self.all_activities().await?;

        let now = Utc::now();
        let ticket = Ticket {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            client_id: data.client_id,
            requester_id: data.requester_id,
            asset_ids: data.asset_ids,
            label: data.label,
            status: data.status,
            demand: data.demand,
            assignee_id: data.assignee_id,
            last_updated_by: acting.user_ref(),
            created_at: now,
            updated_at: now,
            attachments: Vec::new(),
        };
        tickets.push(ticket.clone());

        activities.push(Activity {
            id: Uuid::new_v4(),
            ticket_id: ticket.id,
            author: acting.user_ref(),
            content: "Ticket opened".into(),
            kind: ActivityKind::StatusChange,
            created_at: now,
        });

        self.write_tickets_and_activities(&tickets, &activities)
            .await?;
        info!(ticket_id = %ticket.id, user_id = %acting.id, "ticket created");
        Ok(ticket)
    }

    /// Merge `patch` into the stored ticket. `updated_at` is refreshed
    /// and `last_updated_by` overwritten no matter which fields
    /// changed. A status transition appends exactly one status-change
    /// log entry, atomically with the ticket write.
    pub async fn update_ticket(
        &self,
        id: Uuid,
        patch: TicketPatch,
        acting: &User,
    ) -> HelpdeskResult<Ticket> {
        let mut tickets = self.list_tickets().await?;
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| HelpdeskError::not_found("ticket", id))?;

        let old_status = ticket.status;

        if let Some(title) = patch.title {
            ticket.title = title;
        }
        if let Some(description) = patch.description {
            ticket.description = description;
        }
        if let Some(client_id) = patch.client_id {
            ticket.client_id = client_id;
        }
        if let Some(requester_id) = patch.requester_id {
            ticket.requester_id = requester_id;
        }
        if let Some(asset_ids) = patch.asset_ids {
            ticket.asset_ids = asset_ids;
        }
        if let Some(label) = patch.label {
            ticket.label = label;
        }
        if let Some(status) = patch.status {
            ticket.status = status;
        }
        if let Some(demand) = patch.demand {
            ticket.demand = demand;
        }
        if let Some(assignee_id) = patch.assignee_id {
            // Some(Some(id)) assigns, Some(None) clears.
            ticket.assignee_id = assignee_id;
        }
        if let Some(attachments) = patch.attachments {
            ticket.attachments = attachments;
        }

        ticket.updated_at = Utc::now();
        ticket.last_updated_by = acting.user_ref();
        let updated = ticket.clone();

        if updated.status != old_status {
            let mut activities = self.all_activities().await?;
            activities.push(Activity {
                id: Uuid::new_v4(),
                ticket_id: id,
                author: acting.user_ref(),
                content: format!(
                    "Status changed from \"{old_status}\" to \"{}\"",
                    updated.status
                ),
                kind: ActivityKind::StatusChange,
                created_at: updated.updated_at,
            });
            self.write_tickets_and_activities(&tickets, &activities)
                .await?;
        } else {
            self.store.set(keys::TICKETS, &tickets).await?;
        }

        info!(ticket_id = %id, user_id = %acting.id, "ticket updated");
        Ok(updated)
    }

    // -------------------------------------------------------------------
    // Activities
    // -------------------------------------------------------------------

    /// Log entries for one ticket, in insertion order.
    pub async fn activities_for(&self, ticket_id: Uuid) -> HelpdeskResult<Vec<Activity>> {
        Ok(self
            .all_activities()
            .await?
            .into_iter()
            .filter(|a| a.ticket_id == ticket_id)
            .collect())
    }

    /// Append a user-authored log entry. The parent ticket must exist.
    pub async fn add_activity(&self, data: NewActivity) -> HelpdeskResult<Activity> {
        let tickets = self.list_tickets().await?;
        if !tickets.iter().any(|t| t.id == data.ticket_id) {
            return Err(HelpdeskError::not_found("ticket", data.ticket_id));
        }

        let mut activities = self.all_activities().await?;
        let activity = Activity {
            id: Uuid::new_v4(),
            ticket_id: data.ticket_id,
            author: data.author,
            content: data.content,
            kind: data.kind,
            created_at: Utc::now(),
        };
        activities.push(activity.clone());
        self.store.set(keys::ACTIVITIES, &activities).await?;
        Ok(activity)
    }

    async fn all_activities(&self) -> HelpdeskResult<Vec<Activity>> {
        self.store.get_or(keys::ACTIVITIES, Vec::new()).await
    }

    async fn write_tickets_and_activities(
        &self,
        tickets: &[Ticket],
        activities: &[Activity],
    ) -> HelpdeskResult<()> {
        let entries = vec![
            (keys::TICKETS.to_string(), to_value(tickets)?),
            (keys::ACTIVITIES.to_string(), to_value(activities)?),
        ];
        self.store.set_many(entries).await
    }
}

fn to_value<T: serde::Serialize + ?Sized>(value: &T) -> HelpdeskResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| HelpdeskError::Storage(e.to_string()))
}
