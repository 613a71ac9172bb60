//! Error types for workflow decisions
//!
//! Every business-rule rejection is a distinct variant with a caller-visible
//! message. Only store failures are infrastructural; they pass through as
//! [`WorkflowError::Store`] and classify as [`ErrorCategory::Unavailable`].

use thiserror::Error;

use crate::storage::errors::StorageError;

/// A validation gate or state transition rejected the operation.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Mode A / mentor-side gates
    #[error("the requesting user must be either the mentor or the organization representative")]
    ActorNotMentorOrOrgRep,

    /// Mode B / mentee-side gates
    #[error("the requesting user must be either the mentee or the organization representative")]
    ActorNotMenteeOrOrgRep,

    #[error("the organization representative cannot be named as mentor or mentee")]
    PartySameAsOrgRep,

    #[error("mentor and mentee must be different users")]
    MentorSameAsMentee,

    #[error("start date is not a valid timestamp")]
    InvalidStartDate,

    #[error("end date is not a valid timestamp")]
    InvalidEndDate,

    #[error("end date must be in the future")]
    EndDateInPast,

    #[error("mentor does not exist")]
    MentorNotFound,

    #[error("mentee does not exist")]
    MenteeNotFound,

    #[error("organization representative does not exist")]
    OrgRepNotFound,

    #[error("mentorship relation does not exist")]
    RelationNotFound,

    #[error("this user is not available to mentor")]
    MentorUnavailable,

    #[error("this user is not available to be mentored")]
    MenteeUnavailable,

    #[error("the mentor is already involved in an accepted mentorship relation")]
    MentorAlreadyInRelation,

    #[error("the mentee is already involved in an accepted mentorship relation")]
    MenteeAlreadyInRelation,

    #[error("you are already involved in an accepted mentorship relation")]
    UserAlreadyInRelation,

    /// Second-leg requests require the first leg to have been accepted
    #[error("the mentorship relation has not been accepted yet")]
    RelationNotAccepted,

    #[error("the mentorship relation is not in a pending state")]
    RelationNotPending,

    #[error("you cannot accept a mentorship request you sent yourself")]
    SelfAccept,

    #[error("you cannot accept a mentorship relation you are not involved in")]
    NotInvolved,

    #[error("the mentor id field is missing")]
    MissingMentorId,

    #[error("the mentee id field is missing")]
    MissingMenteeId,

    /// Screening: neither mentor nor mentee supplied
    #[error("either a mentor id or a mentee id is required")]
    MissingPartyId,

    /// Screening: a request names one new party per leg
    #[error("only one of mentor id and mentee id may be supplied")]
    BothPartyIdsSupplied,

    #[error("the start date field is missing")]
    MissingStartDate,

    #[error("the end date field is missing")]
    MissingEndDate,

    #[error("the notes field is missing")]
    MissingNotes,

    /// Screening: the supplied party already holds that seat
    #[error("this mentorship relation has already been requested")]
    AlreadyRequested,

    /// Screening: the sitting mentor has engaged and cannot be replaced
    /// without org-rep mediation
    #[error("the mentor has already accepted this mentorship relation")]
    MentorAlreadyAccepted,

    /// Screening: the sitting mentee has engaged and cannot be replaced
    /// without org-rep mediation
    #[error("the mentee has already accepted this mentorship relation")]
    MenteeAlreadyAccepted,

    #[error("malformed request: {0}")]
    Malformed(&'static str),

    /// Store failure; the operation may be retried by the caller
    #[error(transparent)]
    Store(#[from] StorageError),
}

/// Coarse classification used by transport layers to map errors onto their
/// own status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A referenced user or relation is absent
    NotFound,
    /// A party is already committed, or the relation is not in the expected
    /// phase for this operation
    Conflict,
    /// A required field is missing or unparseable
    InvalidInput,
    /// The store failed; nothing wrong with the request itself
    Unavailable,
}

impl WorkflowError {
    /// Classify this failure.
    pub fn category(&self) -> ErrorCategory {
        use WorkflowError::*;
        match self {
            MentorNotFound | MenteeNotFound | OrgRepNotFound | RelationNotFound => {
                ErrorCategory::NotFound
            }
            ActorNotMentorOrOrgRep
            | ActorNotMenteeOrOrgRep
            | PartySameAsOrgRep
            | MentorSameAsMentee
            | MentorUnavailable
            | MenteeUnavailable
            | MentorAlreadyInRelation
            | MenteeAlreadyInRelation
            | UserAlreadyInRelation
            | RelationNotAccepted
            | RelationNotPending
            | SelfAccept
            | NotInvolved
            | AlreadyRequested
            | MentorAlreadyAccepted
            | MenteeAlreadyAccepted => ErrorCategory::Conflict,
            InvalidStartDate | InvalidEndDate | EndDateInPast | MissingMentorId
            | MissingMenteeId | MissingPartyId | BothPartyIdsSupplied | MissingStartDate
            | MissingEndDate | MissingNotes | Malformed(_) => ErrorCategory::InvalidInput,
            Store(_) => ErrorCategory::Unavailable,
        }
    }
}

/// Result type for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;
