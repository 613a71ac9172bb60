//! Typed request inputs and transport-side screening
//!
//! The transport layer hands over a [`RequestDraft`] with whatever fields
//! the caller supplied. [`screen`] enforces the field-presence rules, and for
//! second-leg drafts derives the full (mentor, mentee) pair by combining the
//! supplied id with the stored counterpart, so the engine always receives a
//! fully-populated [`SubmitRequest`].

use crate::models::{LastActor, RelationId, UserId};
use crate::storage::traits::RelationStore;
use crate::workflow::errors::WorkflowError;

/// Input for [`RelationWorkflowEngine::submit_request`].
///
/// [`RelationWorkflowEngine::submit_request`]: crate::workflow::RelationWorkflowEngine::submit_request
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    /// The authenticated user making this request
    pub actor_id: UserId,

    /// The organization representative mediating the relation
    pub org_rep_id: UserId,

    /// Mentor seat named by this request, if any
    pub mentor_id: Option<UserId>,

    /// Mentee seat named by this request, if any
    pub mentee_id: Option<UserId>,

    /// Present on second-leg requests against an existing relation
    pub relation_id: Option<RelationId>,

    /// Program start as a unix-second timestamp
    pub start_date: i64,

    /// Program end as a unix-second timestamp
    pub end_date: i64,

    /// Free-text notes attached to this step
    pub notes: String,
}

/// A request as it arrives from the transport layer, before screening.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub actor_id: UserId,
    pub org_rep_id: UserId,
    pub mentor_id: Option<UserId>,
    pub mentee_id: Option<UserId>,
    pub relation_id: Option<RelationId>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub notes: Option<String>,
}

impl RequestDraft {
    /// Draft with only the authenticated actor and org rep known.
    pub fn new(actor_id: UserId, org_rep_id: UserId) -> Self {
        Self {
            actor_id,
            org_rep_id,
            mentor_id: None,
            mentee_id: None,
            relation_id: None,
            start_date: None,
            end_date: None,
            notes: None,
        }
    }
}

/// Screen a transport draft into an engine request.
///
/// First-leg drafts pass through with field-presence checks only. Drafts
/// that name an existing relation are resolved against it: the supplied
/// party id is paired with the stored counterpart, repeat requests are
/// rejected, and a sitting party who has engaged (acted last without
/// org-rep mediation) cannot be swapped out.
pub async fn screen(
    draft: RequestDraft,
    store: &dyn RelationStore,
) -> Result<SubmitRequest, WorkflowError> {
    match (draft.mentor_id, draft.mentee_id) {
        (None, None) => return Err(WorkflowError::MissingPartyId),
        (Some(_), Some(_)) => return Err(WorkflowError::BothPartyIdsSupplied),
        _ => {}
    }
    let start_date = draft.start_date.ok_or(WorkflowError::MissingStartDate)?;
    let end_date = draft.end_date.ok_or(WorkflowError::MissingEndDate)?;
    let notes = draft.notes.ok_or(WorkflowError::MissingNotes)?;

    let (mentor_id, mentee_id) = match draft.relation_id {
        None => (draft.mentor_id, draft.mentee_id),
        Some(relation_id) => {
            let relation = store
                .find_relation_by_id(relation_id)
                .await?
                .ok_or(WorkflowError::RelationNotFound)?;
            if relation.accept_date.is_none() {
                return Err(WorkflowError::RelationNotAccepted);
            }

            if let Some(new_mentor) = draft.mentor_id {
                if relation.parties.mentor() == Some(new_mentor) {
                    return Err(WorkflowError::AlreadyRequested);
                }
                let stored_mentee = relation.parties.mentee();
                if stored_mentee.is_none() || sitting_party_engaged(relation.last_actor, relation.parties.mentor()) {
                    return Err(WorkflowError::MentorAlreadyAccepted);
                }
                (Some(new_mentor), stored_mentee)
            } else {
                // exactly one of the two is supplied, checked above
                let new_mentee = draft.mentee_id.ok_or(WorkflowError::MissingPartyId)?;
                if relation.parties.mentee() == Some(new_mentee) {
                    return Err(WorkflowError::AlreadyRequested);
                }
                let stored_mentor = relation.parties.mentor();
                if stored_mentor.is_none() || sitting_party_engaged(relation.last_actor, relation.parties.mentee()) {
                    return Err(WorkflowError::MenteeAlreadyAccepted);
                }
                (stored_mentor, Some(new_mentee))
            }
        }
    };

    Ok(SubmitRequest {
        actor_id: draft.actor_id,
        org_rep_id: draft.org_rep_id,
        mentor_id,
        mentee_id,
        relation_id: draft.relation_id,
        start_date,
        end_date,
        notes,
    })
}

/// The sitting party in the given seat acted last on the relation, meaning
/// they have accepted or edited it themselves rather than through the org
/// rep.
fn sitting_party_engaged(last_actor: LastActor, seat: Option<UserId>) -> bool {
    match (last_actor, seat) {
        (LastActor::Party(actor), Some(sitting)) => actor == sitting,
        _ => false,
    }
}
