//! # Mentora
//!
//! Backend engine for a mentorship-matching platform's program mentorship
//! relations: three-party relationships between an organization
//! representative, a mentor and a mentee, mediated through a multi-step
//! request/accept workflow.
//!
//! A relation is specified over two legs. The org representative (or a named
//! party) first establishes a link with one party; once that leg is
//! accepted, the counterpart is attached by a follow-up request and confirms
//! with a second accept, which flips the relation to ACCEPTED. The engine
//! holds no state of its own; lookups and persistence go through the
//! [`storage::RelationStore`] boundary, and notification delivery stays with
//! the caller via [`workflow::RelationNotifier`].
//!
//! ## Quick Start
//!
//! ```rust
//! use mentora::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let engine = init_with_defaults().await?;
//!
//!     // Users normally come from the platform's identity system.
//!     let store = engine.storage();
//!     store
//!         .save_user(User::new(UserId(1), "Org Rep", "rep@example.org"))
//!         .await?;
//!     store
//!         .save_user(
//!             User::new(UserId(2), "Mentor", "mentor@example.org").offering_mentorship(true),
//!         )
//!         .await?;
//!
//!     // First leg: the org rep proposes a mentor.
//!     let end_date = chrono::Utc::now().timestamp() + 30 * 24 * 60 * 60;
//!     let relation = engine
//!         .submit_request(SubmitRequest {
//!             actor_id: UserId(1),
//!             org_rep_id: UserId(1),
//!             mentor_id: Some(UserId(2)),
//!             mentee_id: None,
//!             relation_id: None,
//!             start_date: chrono::Utc::now().timestamp(),
//!             end_date,
//!             notes: "program intro".to_string(),
//!         })
//!         .await?;
//!
//!     // The mentor confirms the first leg.
//!     engine
//!         .accept_request(UserId(2), UserId(1), relation.id, "happy to help")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod logging;
pub mod models;
pub mod storage;
pub mod workflow;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    // Re-export core initialization functions
    pub use crate::{init, init_with_defaults};

    // Re-export config types
    pub use crate::config::{
        ConfigBuilder, ConfigLoader, LogFormat, LogLevel, MentoraConfig, StorageBackend,
    };

    // Re-export model types
    pub use crate::models::{
        LastActor, MentorshipRelation, RelationId, RelationParties, RelationState, TaskListId,
        TasksList, User, UserId,
    };

    // Re-export workflow types
    pub use crate::workflow::{
        AcceptOutcome, ErrorCategory, RelationNotifier, RelationWorkflowEngine, RequestDraft,
        SenderRole, SubmitRequest, WorkflowError, screen,
    };

    // Re-export storage types
    pub use crate::storage::{InMemoryStore, RelationStore, StorageError};

    // Re-export essential result type
    pub use crate::{MentoraError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Mentora operations
#[derive(Debug, thiserror::Error)]
pub enum MentoraError {
    /// A workflow gate rejected the operation
    #[error(transparent)]
    Workflow(#[from] workflow::WorkflowError),

    /// Error during store operations
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

/// Result type for Mentora operations
pub type Result<T> = std::result::Result<T, MentoraError>;

/// Initialize Mentora with default configuration.
///
/// Sets up logging and the configured store, and returns a ready
/// [`workflow::RelationWorkflowEngine`].
pub async fn init_with_defaults() -> Result<workflow::RelationWorkflowEngine> {
    let config = config::ConfigBuilder::defaults().build()?;
    init(config).await
}

/// Initialize Mentora with the provided configuration.
pub async fn init(config: config::MentoraConfig) -> Result<workflow::RelationWorkflowEngine> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    let store = storage::create_store(&config.storage)?;
    let store = std::sync::Arc::from(store);

    Ok(workflow::RelationWorkflowEngine::new(store))
}
