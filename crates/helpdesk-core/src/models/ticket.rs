//! Ticket domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRef;

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TicketStatus {
    AwaitingService,
    InService,
    AwaitingClient,
    PreparingQuote,
    Scheduled,
    Completed,
    Cancelled,
}

impl TicketStatus {
    /// Completed and Cancelled are terminal; everything else counts as open.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AwaitingService => "Awaiting Service",
            Self::InService => "In Service",
            Self::AwaitingClient => "Awaiting Client",
            Self::PreparingQuote => "Preparing Quote",
            Self::Scheduled => "Scheduled Service",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Technical-domain tag. Codes match the relational `topico_id` column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TicketLabel {
    Cloud,
    Alarms,
    OperatingSystems,
    Network,
    Hardware,
    Security,
}

impl TicketLabel {
    pub fn code(self) -> u8 {
        match self {
            Self::Cloud => 1,
            Self::Alarms => 2,
            Self::OperatingSystems => 3,
            Self::Network => 4,
            Self::Hardware => 5,
            Self::Security => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Cloud),
            2 => Some(Self::Alarms),
            3 => Some(Self::OperatingSystems),
            4 => Some(Self::Network),
            5 => Some(Self::Hardware),
            6 => Some(Self::Security),
            _ => None,
        }
    }
}

/// Nature of the request. Codes match the relational `tipo_id` column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DemandType {
    IncidentReport,
    ConfigurationChange,
    Deployment,
    EquipmentDisposal,
    Documentation,
    UserGuidance,
}

impl DemandType {
    pub fn code(self) -> u8 {
        match self {
            Self::IncidentReport => 1,
            Self::ConfigurationChange => 2,
            Self::Deployment => 3,
            Self::EquipmentDisposal => 4,
            Self::Documentation => 5,
            Self::UserGuidance => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::IncidentReport),
            2 => Some(Self::ConfigurationChange),
            3 => Some(Self::Deployment),
            4 => Some(Self::EquipmentDisposal),
            5 => Some(Self::Documentation),
            6 => Some(Self::UserGuidance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub file_name: String,
    pub file_size: u64,
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub client_id: Uuid,
    pub requester_id: Uuid,
    /// Inventory codes of linked assets; all must belong to `client_id`.
    pub asset_ids: Vec<String>,
    pub label: TicketLabel,
    pub status: TicketStatus,
    pub demand: DemandType,
    pub assignee_id: Option<Uuid>,
    pub last_updated_by: UserRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub attachments: Vec<Attachment>,
}

/// Caller-supplied fields for ticket creation. Id, timestamps,
/// last-updated-by and attachments are stamped by the facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub client_id: Uuid,
    pub requester_id: Uuid,
    pub asset_ids: Vec<String>,
    pub label: TicketLabel,
    pub status: TicketStatus,
    pub demand: DemandType,
    pub assignee_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<Uuid>,
    pub requester_id: Option<Uuid>,
    pub asset_ids: Option<Vec<String>>,
    pub label: Option<TicketLabel>,
    pub status: Option<TicketStatus>,
    pub demand: Option<DemandType>,
    /// `Some(Some(id))` = assign, `Some(None)` = unassign, `None` = no change.
    pub assignee_id: Option<Option<Uuid>>,
    pub attachments: Option<Vec<Attachment>>,
}
