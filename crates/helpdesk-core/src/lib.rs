//! Helpdesk Core — domain models, the storage-adapter contract, and the
//! pure derived-view engines (view gate, triage buckets, asset resolver).
//!
//! Everything here is backend-agnostic: mutation happens in the service
//! crate, persistence in the store crate.

pub mod error;
pub mod inventory;
pub mod models;
pub mod storage;
pub mod triage;
pub mod views;

pub use error::{HelpdeskError, HelpdeskResult};
pub use storage::Storage;
