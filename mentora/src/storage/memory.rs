//! In-memory store for development and testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::{
    MentorshipRelation, NewRelation, RelationId, RelationState, TaskListId, TasksList, User, UserId,
};
use crate::storage::errors::StorageError;
use crate::storage::traits::RelationStore;

/// Simple in-memory implementation of [`RelationStore`].
///
/// Backs the engine in tests and local development. Ids mimic the
/// autoincrement keys of the production database, and `update_relation`
/// enforces the version check that a relational adapter would express as
/// optimistic locking.
#[derive(Debug)]
pub struct InMemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    relations: RwLock<HashMap<RelationId, MentorshipRelation>>,
    task_lists: RwLock<HashMap<TaskListId, TasksList>>,
    next_relation_id: AtomicI64,
    next_task_list_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            relations: RwLock::new(HashMap::new()),
            task_lists: RwLock::new(HashMap::new()),
            next_relation_id: AtomicI64::new(1),
            next_task_list_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelationStore for InMemoryStore {
    async fn health_check(&self) -> Result<bool, StorageError> {
        Ok(true)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.users.write().unwrap().clear();
        self.relations.write().unwrap().clear();
        self.task_lists.write().unwrap().clear();
        Ok(())
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self.users.read().unwrap().get(&id).cloned())
    }

    async fn save_user(&self, user: User) -> Result<User, StorageError> {
        self.users.write().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_relation_by_id(
        &self,
        id: RelationId,
    ) -> Result<Option<MentorshipRelation>, StorageError> {
        Ok(self.relations.read().unwrap().get(&id).cloned())
    }

    async fn create_relation(
        &self,
        relation: NewRelation,
    ) -> Result<MentorshipRelation, StorageError> {
        let id = RelationId(self.next_relation_id.fetch_add(1, Ordering::SeqCst));
        let relation = MentorshipRelation {
            id,
            parties: relation.parties,
            last_actor: relation.last_actor,
            state: RelationState::Pending,
            creation_date: relation.creation_date,
            start_date: relation.start_date,
            end_date: relation.end_date,
            accept_date: None,
            notes: relation.notes,
            tasks_list_id: relation.tasks_list_id,
            version: 0,
        };
        self.relations.write().unwrap().insert(id, relation.clone());
        Ok(relation)
    }

    async fn update_relation(
        &self,
        mut relation: MentorshipRelation,
    ) -> Result<MentorshipRelation, StorageError> {
        let mut relations = self.relations.write().unwrap();
        let current = relations
            .get(&relation.id)
            .ok_or_else(|| StorageError::NotFound(format!("relation {}", relation.id)))?;

        if current.version != relation.version {
            return Err(StorageError::Conflict(format!(
                "relation {} was modified concurrently",
                relation.id
            )));
        }

        relation.version += 1;
        relations.insert(relation.id, relation.clone());
        Ok(relation)
    }

    async fn create_task_list(&self) -> Result<TasksList, StorageError> {
        let id = TaskListId(self.next_task_list_id.fetch_add(1, Ordering::SeqCst));
        let task_list = TasksList {
            id,
            created_at: Utc::now(),
        };
        self.task_lists
            .write()
            .unwrap()
            .insert(id, task_list.clone());
        Ok(task_list)
    }

    async fn list_relations_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<MentorshipRelation>, StorageError> {
        let relations = self.relations.read().unwrap();
        Ok(relations
            .values()
            .filter(|relation| relation.parties.involves(user))
            .cloned()
            .collect())
    }
}
