//! User model for mentorship participants

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// A platform user who can take part in mentorship relations.
///
/// Users never embed the relations they participate in; that question is
/// answered by the store's `list_relations_for_user`, which keeps the
/// ownership of relation records with the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Identity-system id of the user
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address used by the notification boundary
    pub email: String,

    /// Whether this user has opted in to mentoring others
    pub available_to_mentor: bool,

    /// Whether this user is looking for a mentor
    pub need_mentoring: bool,
}

impl User {
    /// Create a user with both capability flags off.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            available_to_mentor: false,
            need_mentoring: false,
        }
    }

    /// Mark the user as available to mentor others.
    pub fn offering_mentorship(mut self, available: bool) -> Self {
        self.available_to_mentor = available;
        self
    }

    /// Mark the user as looking for a mentor.
    pub fn seeking_mentorship(mut self, seeking: bool) -> Self {
        self.need_mentoring = seeking;
        self
    }
}
