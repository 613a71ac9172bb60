//! Shared fixtures for workflow integration tests
#![allow(dead_code)]

use chrono::{Duration, Utc};
use std::sync::Arc;

use mentora::models::{
    LastActor, MentorshipRelation, NewRelation, RelationParties, RelationState, User, UserId,
};
use mentora::storage::{InMemoryStore, RelationStore};
use mentora::workflow::{RelationWorkflowEngine, SubmitRequest};

pub const ORG_REP: UserId = UserId(1);
pub const MENTOR: UserId = UserId(2);
pub const OTHER_MENTOR: UserId = UserId(3);
pub const MENTEE: UserId = UserId(5);
pub const OTHER_MENTEE: UserId = UserId(6);
pub const BUSY_MENTOR: UserId = UserId(7);
pub const RELUCTANT_MENTEE: UserId = UserId(8);
pub const OUTSIDER: UserId = UserId(9);

/// Engine over a fresh in-memory store seeded with the standard cast.
pub async fn engine_with_users() -> RelationWorkflowEngine {
    let store = Arc::new(InMemoryStore::new());

    let users = vec![
        User::new(ORG_REP, "Org Rep", "rep@example.org"),
        User::new(MENTOR, "Mentor", "mentor@example.org").offering_mentorship(true),
        User::new(OTHER_MENTOR, "Other Mentor", "mentor2@example.org").offering_mentorship(true),
        User::new(MENTEE, "Mentee", "mentee@example.org").seeking_mentorship(true),
        User::new(OTHER_MENTEE, "Other Mentee", "mentee2@example.org").seeking_mentorship(true),
        User::new(BUSY_MENTOR, "Busy Mentor", "busy@example.org"),
        User::new(RELUCTANT_MENTEE, "Reluctant", "reluctant@example.org"),
        User::new(OUTSIDER, "Outsider", "outsider@example.org")
            .offering_mentorship(true)
            .seeking_mentorship(true),
    ];
    for user in users {
        store.save_user(user).await.expect("failed to seed user");
    }

    RelationWorkflowEngine::new(store)
}

/// Unix timestamp `days` from now.
pub fn in_days(days: i64) -> i64 {
    (Utc::now() + Duration::days(days)).timestamp()
}

/// Plant an already-ACCEPTED relation between two users, bypassing the
/// workflow, to exercise the "already committed elsewhere" gates.
pub async fn seed_accepted_relation(
    engine: &RelationWorkflowEngine,
    mentor: UserId,
    mentee: UserId,
) -> MentorshipRelation {
    let store = engine.storage();
    let tasks = store.create_task_list().await.expect("task list");
    let now = Utc::now();
    let relation = store
        .create_relation(NewRelation {
            parties: RelationParties::Both { mentor, mentee },
            last_actor: LastActor::OrgRep,
            creation_date: now,
            start_date: now,
            end_date: now + Duration::days(30),
            notes: "seeded".to_string(),
            tasks_list_id: tasks.id,
        })
        .await
        .expect("create relation");

    let mut accepted = relation;
    accepted.state = RelationState::Accepted;
    accepted.accept_date = Some(now);
    store.update_relation(accepted).await.expect("accept seed")
}

/// First-leg request naming a mentor.
pub fn mentor_request(actor: UserId, mentor: UserId) -> SubmitRequest {
    SubmitRequest {
        actor_id: actor,
        org_rep_id: ORG_REP,
        mentor_id: Some(mentor),
        mentee_id: None,
        relation_id: None,
        start_date: in_days(1),
        end_date: in_days(30),
        notes: "intro".to_string(),
    }
}

/// First-leg request naming a mentee.
pub fn mentee_request(actor: UserId, mentee: UserId) -> SubmitRequest {
    SubmitRequest {
        mentor_id: None,
        mentee_id: Some(mentee),
        ..mentor_request(actor, mentee)
    }
}

/// Second-leg request against an existing relation.
pub fn second_leg_request(
    actor: UserId,
    relation_id: mentora::models::RelationId,
    mentor: UserId,
    mentee: UserId,
) -> SubmitRequest {
    SubmitRequest {
        mentor_id: Some(mentor),
        mentee_id: Some(mentee),
        relation_id: Some(relation_id),
        ..mentor_request(actor, mentor)
    }
}
