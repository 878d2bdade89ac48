//! Client domain model.
//!
//! Clients are static reference data: the catalog is seeded, never
//! mutated through the facade.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named individual at a client who may raise tickets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requester {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub contact_person: String,
    /// Ordered list of valid requesters for this client. A ticket's
    /// requester is expected to come from here, but that is a
    /// form-population convention, not a hard invariant.
    pub requesters: Vec<Requester>,
}
