//! Helpdesk Service — the domain API facade.
//!
//! [`Helpdesk`] is the single point of mutation over users, clients,
//! assets, tickets, activities and the active session. It is generic
//! over the storage adapter so the same facade runs against the
//! in-memory store in tests and the file snapshot store in the server.

pub mod facade;
pub mod seed;

pub use facade::Helpdesk;
