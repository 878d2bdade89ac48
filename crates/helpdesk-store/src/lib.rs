//! Helpdesk Store — implementations of the [`helpdesk_core::Storage`]
//! contract.
//!
//! This crate provides:
//! - An in-memory store ([`MemoryStore`]) for tests and ephemeral runs
//! - A JSON-file snapshot store ([`JsonFileStore`]) for persistence
//! - Error types ([`StoreError`])

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
