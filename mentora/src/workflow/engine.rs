//! Relation workflow engine
//!
//! Pure decision logic for the three-party mentorship workflow: given an
//! actor, the named parties and any existing relation state, decide whether
//! a submit/accept operation is valid and compute the resulting relation.
//! All I/O goes through the [`RelationStore`] boundary; the engine keeps no
//! state of its own between calls.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{
    LastActor, MentorshipRelation, NewRelation, RelationId, RelationParties, RelationState, UserId,
};
use crate::storage::traits::RelationStore;
use crate::workflow::errors::WorkflowError;
use crate::workflow::events::{NotifierRegistry, RelationAccepted, RequestSent, SenderRole};
use crate::workflow::request::SubmitRequest;

type Result<T> = std::result::Result<T, WorkflowError>;

/// Which seat a first-leg request is establishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Mentor,
    Mentee,
}

/// Outcome of a successful accept call.
#[derive(Debug, Clone)]
pub struct AcceptOutcome {
    /// The relation as persisted by this call
    pub relation: MentorshipRelation,

    /// True when this was the second accept, the one that flipped the
    /// state to ACCEPTED
    pub accepted: bool,
}

/// The decision core of the mentorship workflow.
///
/// A relation moves through two legs: the org representative (or a named
/// party) first establishes a link with one party, the counterpart is
/// attached by a follow-up request, and each leg is confirmed by an accept
/// call. `submit_request` and `accept_request` are the only entry points
/// that mutate relations.
#[derive(Debug)]
pub struct RelationWorkflowEngine {
    store: Arc<dyn RelationStore>,
    notifiers: NotifierRegistry,
}

impl RelationWorkflowEngine {
    /// Create an engine over the given store.
    pub fn new(store: Arc<dyn RelationStore>) -> Self {
        Self {
            store,
            notifiers: NotifierRegistry::new(),
        }
    }

    /// Notifier registry for this engine.
    pub fn notifiers(&self) -> &NotifierRegistry {
        &self.notifiers
    }

    /// The underlying store.
    pub fn storage(&self) -> &Arc<dyn RelationStore> {
        &self.store
    }

    /// Submit a relation request.
    ///
    /// The combination of `relation_id`, `mentor_id` and `mentee_id` selects
    /// the mode: a first leg establishing the mentor or mentee seat, or a
    /// second leg attaching (or reassigning) the counterpart on an existing
    /// relation. Returns the persisted relation snapshot.
    pub async fn submit_request(&self, request: SubmitRequest) -> Result<MentorshipRelation> {
        let relation = match (request.relation_id, request.mentor_id, request.mentee_id) {
            (None, Some(mentor_id), None) => {
                self.first_leg(&request, Side::Mentor, mentor_id).await?
            }
            (None, None, Some(mentee_id)) => {
                self.first_leg(&request, Side::Mentee, mentee_id).await?
            }
            (Some(relation_id), Some(mentor_id), Some(mentee_id)) => {
                self.second_leg(&request, relation_id, mentor_id, mentee_id)
                    .await?
            }
            (Some(_), None, Some(_)) => return Err(WorkflowError::MissingMentorId),
            (Some(_), Some(_), None) => return Err(WorkflowError::MissingMenteeId),
            (None, Some(_), Some(_)) => {
                return Err(WorkflowError::Malformed(
                    "a first-leg request names exactly one party",
                ));
            }
            (None, None, None) | (Some(_), None, None) => {
                return Err(WorkflowError::Malformed("no mentor or mentee named"));
            }
        };

        if let Some(event) = request_sent_event(&request, &relation) {
            self.notifiers.notify_request_sent(&event).await;
        }

        Ok(relation)
    }

    /// Accept a pending relation request.
    ///
    /// The first accept sets the accept date and leaves the relation
    /// pending; the second flips it to ACCEPTED. Each accept hands the
    /// last-actor marker to the other side.
    pub async fn accept_request(
        &self,
        user_id: UserId,
        org_rep_id: UserId,
        request_id: RelationId,
        notes: &str,
    ) -> Result<AcceptOutcome> {
        let mut relation = self
            .store
            .find_relation_by_id(request_id)
            .await?
            .ok_or(WorkflowError::RelationNotFound)?;

        if relation.state != RelationState::Pending {
            return Err(WorkflowError::RelationNotPending);
        }
        if relation.last_actor.matches(user_id, org_rep_id) {
            return Err(WorkflowError::SelfAccept);
        }
        if !relation.parties.involves(user_id) && user_id != org_rep_id {
            return Err(WorkflowError::NotInvolved);
        }
        if self.in_accepted_relation(user_id).await? {
            return Err(WorkflowError::UserAlreadyInRelation);
        }

        if let RelationParties::Both { mentor, mentee } = relation.parties {
            if user_id == mentor {
                if self.in_accepted_relation(mentee).await? {
                    return Err(WorkflowError::MenteeAlreadyInRelation);
                }
            } else if user_id == mentee {
                if self.in_accepted_relation(mentor).await? {
                    return Err(WorkflowError::MentorAlreadyInRelation);
                }
            }

            // A named party may not close out an action taken by their
            // counterpart; that confirmation belongs to the org rep.
            let counterpart_accept = match relation.last_actor {
                LastActor::Party(last) => {
                    (last == mentee && user_id == mentor) || (last == mentor && user_id == mentee)
                }
                LastActor::OrgRep => false,
            };
            if counterpart_accept && user_id != org_rep_id {
                return Err(WorkflowError::NotInvolved);
            }
        }

        relation.last_actor = relation.last_actor.toggle(user_id);
        relation.notes = notes.to_string();

        let accepted = relation.accept_date.is_some();
        if accepted {
            relation.state = RelationState::Accepted;
        }
        relation.accept_date = Some(Utc::now());

        let relation = self.store.update_relation(relation).await?;

        if accepted {
            info!(relation_id = %relation.id, "mentorship relation accepted");
            let event = RelationAccepted {
                relation_id: relation.id,
                mentor_id: relation.parties.mentor(),
                mentee_id: relation.parties.mentee(),
                org_rep_id,
            };
            self.notifiers.notify_relation_accepted(&event).await;
        } else {
            debug!(relation_id = %relation.id, "first accept recorded, second leg pending");
        }

        Ok(AcceptOutcome { relation, accepted })
    }

    /// First leg: create a relation linking the org rep with one party.
    async fn first_leg(
        &self,
        request: &SubmitRequest,
        side: Side,
        party_id: UserId,
    ) -> Result<MentorshipRelation> {
        let actor = request.actor_id;
        let org_rep = request.org_rep_id;

        if actor != party_id && actor != org_rep {
            return Err(match side {
                Side::Mentor => WorkflowError::ActorNotMentorOrOrgRep,
                Side::Mentee => WorkflowError::ActorNotMenteeOrOrgRep,
            });
        }
        if party_id == org_rep {
            return Err(WorkflowError::PartySameAsOrgRep);
        }

        let start_date = parse_timestamp(request.start_date).ok_or(WorkflowError::InvalidStartDate)?;
        let end_date = parse_timestamp(request.end_date).ok_or(WorkflowError::InvalidEndDate)?;
        if end_date < Utc::now() {
            return Err(WorkflowError::EndDateInPast);
        }

        let party = self
            .store
            .find_user_by_id(party_id)
            .await?
            .ok_or(match side {
                Side::Mentor => WorkflowError::MentorNotFound,
                Side::Mentee => WorkflowError::MenteeNotFound,
            })?;
        match side {
            Side::Mentor if !party.available_to_mentor => {
                return Err(WorkflowError::MentorUnavailable);
            }
            Side::Mentee if !party.need_mentoring => {
                return Err(WorkflowError::MenteeUnavailable);
            }
            _ => {}
        }

        self.store
            .find_user_by_id(org_rep)
            .await?
            .ok_or(WorkflowError::OrgRepNotFound)?;

        if self.in_accepted_relation(party_id).await? {
            return Err(match side {
                Side::Mentor => WorkflowError::MentorAlreadyInRelation,
                Side::Mentee => WorkflowError::MenteeAlreadyInRelation,
            });
        }

        let tasks_list = self.store.create_task_list().await?;

        // When a named party initiates, the org rep holds the counterpart
        // seat until the second leg swaps in the real one.
        let parties = match (side, actor == org_rep) {
            (Side::Mentor, true) => RelationParties::MentorOnly(party_id),
            (Side::Mentor, false) => RelationParties::Both {
                mentor: party_id,
                mentee: org_rep,
            },
            (Side::Mentee, true) => RelationParties::MenteeOnly(party_id),
            (Side::Mentee, false) => RelationParties::Both {
                mentor: org_rep,
                mentee: party_id,
            },
        };

        let relation = self
            .store
            .create_relation(NewRelation {
                parties,
                last_actor: LastActor::from_actor(actor, org_rep),
                creation_date: Utc::now(),
                start_date,
                end_date,
                notes: request.notes.clone(),
                tasks_list_id: tasks_list.id,
            })
            .await?;

        info!(relation_id = %relation.id, side = ?side, "mentorship relation created");
        Ok(relation)
    }

    /// Second leg: attach or reassign the counterpart on an existing,
    /// once-accepted relation.
    async fn second_leg(
        &self,
        request: &SubmitRequest,
        relation_id: RelationId,
        mentor_id: UserId,
        mentee_id: UserId,
    ) -> Result<MentorshipRelation> {
        if mentor_id == mentee_id {
            return Err(WorkflowError::MentorSameAsMentee);
        }

        let actor = request.actor_id;
        let org_rep = request.org_rep_id;

        let mut relation = self
            .store
            .find_relation_by_id(relation_id)
            .await?
            .ok_or(WorkflowError::RelationNotFound)?;
        if relation.accept_date.is_none() {
            return Err(WorkflowError::RelationNotAccepted);
        }

        match relation.parties {
            // No mentee yet: this request attaches one.
            parties @ (RelationParties::Unset | RelationParties::MentorOnly(_)) => {
                self.store
                    .find_user_by_id(mentee_id)
                    .await?
                    .ok_or(WorkflowError::MenteeNotFound)?;
                if actor != mentee_id && actor != org_rep {
                    return Err(WorkflowError::ActorNotMenteeOrOrgRep);
                }
                if mentee_id == org_rep {
                    return Err(WorkflowError::PartySameAsOrgRep);
                }
                if self.in_accepted_relation(mentee_id).await? {
                    return Err(WorkflowError::MenteeAlreadyInRelation);
                }

                relation.last_actor = LastActor::from_actor(actor, org_rep);
                relation.parties = parties.with_mentee(mentee_id);
                relation.notes = request.notes.clone();
                debug!(relation_id = %relation.id, mentee = %mentee_id, "mentee attached");
            }

            // No mentor yet: this request attaches one.
            parties @ RelationParties::MenteeOnly(_) => {
                self.store
                    .find_user_by_id(mentor_id)
                    .await?
                    .ok_or(WorkflowError::MentorNotFound)?;
                if actor != mentor_id && actor != org_rep {
                    return Err(WorkflowError::ActorNotMentorOrOrgRep);
                }
                if mentor_id == org_rep {
                    return Err(WorkflowError::PartySameAsOrgRep);
                }
                if self.in_accepted_relation(mentor_id).await? {
                    return Err(WorkflowError::MentorAlreadyInRelation);
                }

                relation.last_actor = LastActor::from_actor(actor, org_rep);
                relation.parties = parties.with_mentor(mentor_id);
                relation.notes = request.notes.clone();
                debug!(relation_id = %relation.id, mentor = %mentor_id, "mentor attached");
            }

            // Fully specified: exactly one seat may be reassigned.
            RelationParties::Both {
                mentor: current_mentor,
                mentee: current_mentee,
            } => {
                if current_mentor == mentor_id && current_mentee != mentee_id {
                    self.store
                        .find_user_by_id(mentee_id)
                        .await?
                        .ok_or(WorkflowError::MenteeNotFound)?;
                    if actor != mentee_id && actor != org_rep {
                        return Err(WorkflowError::ActorNotMenteeOrOrgRep);
                    }
                    if mentee_id == org_rep {
                        return Err(WorkflowError::PartySameAsOrgRep);
                    }
                    if self.in_accepted_relation(mentee_id).await? {
                        return Err(WorkflowError::MenteeAlreadyInRelation);
                    }

                    relation.last_actor = LastActor::from_actor(actor, org_rep);
                    relation.parties = relation.parties.with_mentee(mentee_id);
                    relation.notes = request.notes.clone();
                    debug!(relation_id = %relation.id, mentee = %mentee_id, "mentee reassigned");
                } else if current_mentee == mentee_id && current_mentor != mentor_id {
                    self.store
                        .find_user_by_id(mentor_id)
                        .await?
                        .ok_or(WorkflowError::MentorNotFound)?;
                    if actor != mentor_id && actor != org_rep {
                        return Err(WorkflowError::ActorNotMentorOrOrgRep);
                    }
                    if mentor_id == org_rep {
                        return Err(WorkflowError::PartySameAsOrgRep);
                    }
                    if self.in_accepted_relation(mentor_id).await? {
                        return Err(WorkflowError::MentorAlreadyInRelation);
                    }

                    relation.last_actor = LastActor::from_actor(actor, org_rep);
                    relation.parties = relation.parties.with_mentor(mentor_id);
                    relation.notes = request.notes.clone();
                    debug!(relation_id = %relation.id, mentor = %mentor_id, "mentor reassigned");
                } else {
                    // Both ids match the current assignment: nothing to
                    // change, nothing persisted.
                    debug!(relation_id = %relation.id, "second-leg request matches current assignment");
                    return Ok(relation);
                }
            }
        }

        let relation = self.store.update_relation(relation).await?;
        Ok(relation)
    }

    /// Whether any of the user's relations, in either seat, is ACCEPTED.
    async fn in_accepted_relation(&self, user: UserId) -> Result<bool> {
        let relations = self.store.list_relations_for_user(user).await?;
        Ok(relations
            .iter()
            .any(|relation| relation.state == RelationState::Accepted))
    }
}

/// Interpret a unix-second timestamp.
fn parse_timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Routing for the request-sent notification: a named party writes to the
/// org rep, the org rep writes to the relation's mentor or, failing that,
/// its mentee.
fn request_sent_event(
    request: &SubmitRequest,
    relation: &MentorshipRelation,
) -> Option<RequestSent> {
    let actor = request.actor_id;
    let (sender_role, recipient_id) = if request.mentor_id == Some(actor) {
        (SenderRole::Mentor, request.org_rep_id)
    } else if request.mentee_id == Some(actor) {
        (SenderRole::Mentee, request.org_rep_id)
    } else {
        let recipient = request.mentor_id.or(request.mentee_id)?;
        (SenderRole::Organization, recipient)
    };

    Some(RequestSent {
        relation_id: relation.id,
        sender_id: actor,
        recipient_id,
        sender_role,
        notes: request.notes.clone(),
    })
}
