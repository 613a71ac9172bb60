//! Storage abstractions and implementations
//!
//! This module defines the store boundary the workflow engine runs against
//! and ships the in-memory adapter used for development and tests.
//! Production adapters (relational, remote) implement [`RelationStore`]
//! outside this crate.

pub mod errors;
pub mod memory;
pub mod traits;

pub use errors::{StorageError, StorageResult};
pub use memory::InMemoryStore;
pub use traits::RelationStore;

use crate::config::{StorageBackend, StorageConfig};

/// Build a store from configuration.
pub fn create_store(config: &StorageConfig) -> Result<Box<dyn RelationStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => Ok(Box::new(InMemoryStore::new())),
    }
}
