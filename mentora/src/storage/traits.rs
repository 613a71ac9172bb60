//! Trait definition for the relation store boundary

use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::{MentorshipRelation, NewRelation, RelationId, TasksList, User, UserId};
use crate::storage::errors::StorageError;

/// Lookup/persist boundary for relation and user entities.
///
/// The workflow engine runs short read-validate-write sequences against this
/// boundary. Implementations must reject stale writes in `update_relation`
/// (version check or equivalent row lock) so that two concurrent submissions
/// touching the same relation cannot both pass the engine's conflict gates
/// and both persist.
#[async_trait]
pub trait RelationStore: Send + Sync + 'static + Debug {
    /// Check if the store is healthy and available
    async fn health_check(&self) -> Result<bool, StorageError>;

    /// Clear all data in the store
    async fn clear(&self) -> Result<(), StorageError>;

    /// Look up a user by id
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Insert or replace a user record
    async fn save_user(&self, user: User) -> Result<User, StorageError>;

    /// Look up a relation by id
    async fn find_relation_by_id(
        &self,
        id: RelationId,
    ) -> Result<Option<MentorshipRelation>, StorageError>;

    /// Persist a new relation, assigning its id
    async fn create_relation(
        &self,
        relation: NewRelation,
    ) -> Result<MentorshipRelation, StorageError>;

    /// Persist changes to an existing relation. Fails with
    /// [`StorageError::Conflict`] when the record changed since it was read.
    async fn update_relation(
        &self,
        relation: MentorshipRelation,
    ) -> Result<MentorshipRelation, StorageError>;

    /// Create an empty companion task list, assigning its id
    async fn create_task_list(&self) -> Result<TasksList, StorageError>;

    /// All relations in which the user holds either seat, in any state
    async fn list_relations_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<MentorshipRelation>, StorageError>;
}
