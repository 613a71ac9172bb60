//! Mentorship relation model and its workflow-facing value types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RelationId, TaskListId, UserId};

/// Lifecycle state of a mentorship relation.
///
/// The request/accept workflow only ever moves relations between `Pending`
/// and `Accepted`; the remaining states are set by other parts of the
/// platform and are terminal as far as this engine is concerned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RelationState {
    /// Waiting on one or more accept steps
    Pending,
    /// Both legs accepted, relation is live
    Accepted,
    /// Declined by a party
    Rejected,
    /// Withdrawn before acceptance
    Cancelled,
    /// Ran to its end date
    Completed,
}

/// Which seats of a relation are filled.
///
/// A relation is specified over two legs: the org representative first links
/// one party, then the counterpart is attached in a follow-up request. The
/// tagged layout keeps "pending with no parties at all" out of the
/// persisted shapes the engine produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationParties {
    /// No seat filled
    Unset,
    /// Only the mentor seat is filled
    MentorOnly(UserId),
    /// Only the mentee seat is filled
    MenteeOnly(UserId),
    /// Fully specified
    Both { mentor: UserId, mentee: UserId },
}

impl Default for RelationParties {
    fn default() -> Self {
        Self::Unset
    }
}

impl RelationParties {
    /// The mentor seat, if filled.
    pub fn mentor(&self) -> Option<UserId> {
        match self {
            Self::MentorOnly(mentor) | Self::Both { mentor, .. } => Some(*mentor),
            _ => None,
        }
    }

    /// The mentee seat, if filled.
    pub fn mentee(&self) -> Option<UserId> {
        match self {
            Self::MenteeOnly(mentee) | Self::Both { mentee, .. } => Some(*mentee),
            _ => None,
        }
    }

    /// True once both seats are filled.
    pub fn is_fully_specified(&self) -> bool {
        matches!(self, Self::Both { .. })
    }

    /// Whether the given user sits in either seat.
    pub fn involves(&self, user: UserId) -> bool {
        self.mentor() == Some(user) || self.mentee() == Some(user)
    }

    /// Fill or replace the mentor seat.
    pub fn with_mentor(self, mentor: UserId) -> Self {
        match self {
            Self::Unset | Self::MentorOnly(_) => Self::MentorOnly(mentor),
            Self::MenteeOnly(mentee) | Self::Both { mentee, .. } => Self::Both { mentor, mentee },
        }
    }

    /// Fill or replace the mentee seat.
    pub fn with_mentee(self, mentee: UserId) -> Self {
        match self {
            Self::Unset | Self::MenteeOnly(_) => Self::MenteeOnly(mentee),
            Self::MentorOnly(mentor) | Self::Both { mentor, .. } => Self::Both { mentor, mentee },
        }
    }
}

/// The party who performed the most recent mutating action on a relation.
///
/// Acceptance ping-pongs this marker between the org representative and the
/// named parties; a user may never accept while they are the marked actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LastActor {
    /// The organization representative acted last
    OrgRep,
    /// The named mentor or mentee with this id acted last
    Party(UserId),
}

impl LastActor {
    /// Classify an acting user against the relation's org representative.
    pub fn from_actor(actor: UserId, org_rep: UserId) -> Self {
        if actor == org_rep {
            Self::OrgRep
        } else {
            Self::Party(actor)
        }
    }

    /// Flip the marker for an accept step: an org-rep action hands it to the
    /// accepting user, a party action hands it back to the org rep.
    pub fn toggle(self, actor: UserId) -> Self {
        match self {
            Self::OrgRep => Self::Party(actor),
            Self::Party(_) => Self::OrgRep,
        }
    }

    /// Whether the given user is the marked actor.
    pub fn matches(&self, user: UserId, org_rep: UserId) -> bool {
        match self {
            Self::OrgRep => user == org_rep,
            Self::Party(id) => *id == user,
        }
    }

    /// Concrete user id of the marked actor.
    pub fn resolve(&self, org_rep: UserId) -> UserId {
        match self {
            Self::OrgRep => org_rep,
            Self::Party(id) => *id,
        }
    }
}

/// The central mentorship relation entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MentorshipRelation {
    /// Store-assigned id
    pub id: RelationId,

    /// Seat assignment for this relation
    pub parties: RelationParties,

    /// Who acted last on this relation
    pub last_actor: LastActor,

    /// Lifecycle state
    pub state: RelationState,

    /// When the relation record was created
    pub creation_date: DateTime<Utc>,

    /// Program start
    pub start_date: DateTime<Utc>,

    /// Program end
    pub end_date: DateTime<Utc>,

    /// Set by the first accept step and kept thereafter. Non-null while the
    /// state is still `Pending` means the first leg has been accepted and
    /// the second is awaited.
    pub accept_date: Option<DateTime<Utc>>,

    /// Free-text notes, overwritten at each workflow step
    pub notes: String,

    /// Companion task list, created 1:1 with the relation
    pub tasks_list_id: TaskListId,

    /// Optimistic-concurrency token owned by the store
    pub version: u64,
}

/// Insert shape for a relation. The store assigns the id, starts the version
/// at zero and brings the record up in `Pending` with no accept date, so a
/// freshly created relation cannot claim to be further along than it is.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRelation {
    pub parties: RelationParties,
    pub last_actor: LastActor,
    pub creation_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: String,
    pub tasks_list_id: TaskListId,
}

/// Companion record created alongside every relation. Task management is
/// handled elsewhere on the platform; the workflow only guarantees the
/// record exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TasksList {
    pub id: TaskListId,
    pub created_at: DateTime<Utc>,
}
