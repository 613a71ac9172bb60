//! Transport-side screening of request drafts

mod common;

use common::*;
use mentora::models::RelationId;
use mentora::workflow::{RequestDraft, WorkflowError, screen};

fn draft(actor: mentora::models::UserId) -> RequestDraft {
    RequestDraft {
        mentor_id: Some(MENTOR),
        start_date: Some(in_days(1)),
        end_date: Some(in_days(30)),
        notes: Some("intro".to_string()),
        ..RequestDraft::new(actor, ORG_REP)
    }
}

#[tokio::test]
async fn screening_requires_exactly_one_party() {
    let engine = engine_with_users().await;
    let store = engine.storage();

    let neither = RequestDraft {
        mentor_id: None,
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(neither, store.as_ref()).await.unwrap_err(),
        WorkflowError::MissingPartyId
    ));

    let both = RequestDraft {
        mentee_id: Some(MENTEE),
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(both, store.as_ref()).await.unwrap_err(),
        WorkflowError::BothPartyIdsSupplied
    ));
}

#[tokio::test]
async fn screening_requires_dates_and_notes() {
    let engine = engine_with_users().await;
    let store = engine.storage();

    let missing_start = RequestDraft {
        start_date: None,
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(missing_start, store.as_ref()).await.unwrap_err(),
        WorkflowError::MissingStartDate
    ));

    let missing_end = RequestDraft {
        end_date: None,
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(missing_end, store.as_ref()).await.unwrap_err(),
        WorkflowError::MissingEndDate
    ));

    let missing_notes = RequestDraft {
        notes: None,
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(missing_notes, store.as_ref()).await.unwrap_err(),
        WorkflowError::MissingNotes
    ));
}

#[tokio::test]
async fn first_leg_draft_passes_through() {
    let engine = engine_with_users().await;

    let request = screen(draft(ORG_REP), engine.storage().as_ref())
        .await
        .expect("screening should pass");

    assert_eq!(request.mentor_id, Some(MENTOR));
    assert_eq!(request.mentee_id, None);
    assert_eq!(request.relation_id, None);

    // The screened request is engine-ready.
    engine.submit_request(request).await.unwrap();
}

#[tokio::test]
async fn second_leg_draft_pairs_with_stored_counterpart() {
    let engine = engine_with_users().await;
    let relation = engine
        .submit_request(mentor_request(ORG_REP, MENTOR))
        .await
        .unwrap();
    engine
        .accept_request(MENTOR, ORG_REP, relation.id, "ok")
        .await
        .unwrap();

    let second = RequestDraft {
        mentor_id: None,
        mentee_id: Some(MENTEE),
        relation_id: Some(relation.id),
        ..draft(ORG_REP)
    };
    let request = screen(second, engine.storage().as_ref())
        .await
        .expect("screening should pass");

    assert_eq!(request.mentor_id, Some(MENTOR));
    assert_eq!(request.mentee_id, Some(MENTEE));
    assert_eq!(request.relation_id, Some(relation.id));

    let updated = engine.submit_request(request).await.unwrap();
    assert_eq!(updated.parties.mentee(), Some(MENTEE));
}

#[tokio::test]
async fn screening_rejects_unknown_or_unaccepted_relations() {
    let engine = engine_with_users().await;
    let store = engine.storage();

    let unknown = RequestDraft {
        relation_id: Some(RelationId(404)),
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(unknown, store.as_ref()).await.unwrap_err(),
        WorkflowError::RelationNotFound
    ));

    let relation = engine
        .submit_request(mentor_request(ORG_REP, MENTOR))
        .await
        .unwrap();
    let premature = RequestDraft {
        mentor_id: None,
        mentee_id: Some(MENTEE),
        relation_id: Some(relation.id),
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(premature, store.as_ref()).await.unwrap_err(),
        WorkflowError::RelationNotAccepted
    ));
}

#[tokio::test]
async fn repeat_request_for_sitting_party_is_rejected() {
    let engine = engine_with_users().await;
    let relation = engine
        .submit_request(mentor_request(ORG_REP, MENTOR))
        .await
        .unwrap();
    engine
        .accept_request(MENTOR, ORG_REP, relation.id, "ok")
        .await
        .unwrap();

    let repeat = RequestDraft {
        relation_id: Some(relation.id),
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(repeat, engine.storage().as_ref()).await.unwrap_err(),
        WorkflowError::AlreadyRequested
    ));
}

#[tokio::test]
async fn sitting_mentor_without_counterpart_cannot_be_replaced() {
    let engine = engine_with_users().await;
    let relation = engine
        .submit_request(mentor_request(ORG_REP, MENTOR))
        .await
        .unwrap();
    engine
        .accept_request(MENTOR, ORG_REP, relation.id, "ok")
        .await
        .unwrap();

    // The relation has a mentor and no mentee; asking for a different
    // mentor now is refused.
    let replace = RequestDraft {
        mentor_id: Some(OTHER_MENTOR),
        relation_id: Some(relation.id),
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(replace, engine.storage().as_ref()).await.unwrap_err(),
        WorkflowError::MentorAlreadyAccepted
    ));
}

#[tokio::test]
async fn engaged_mentor_cannot_be_replaced_without_mediation() {
    let engine = engine_with_users().await;

    // Mentee initiates, org rep confirms, mentor attaches himself: the
    // marker sits on the mentor.
    let relation = engine
        .submit_request(mentee_request(MENTEE, MENTEE))
        .await
        .unwrap();
    engine
        .accept_request(ORG_REP, ORG_REP, relation.id, "ok")
        .await
        .unwrap();
    engine
        .submit_request(second_leg_request(MENTOR, relation.id, MENTOR, MENTEE))
        .await
        .unwrap();

    let replace = RequestDraft {
        mentor_id: Some(OTHER_MENTOR),
        relation_id: Some(relation.id),
        ..draft(ORG_REP)
    };
    assert!(matches!(
        screen(replace, engine.storage().as_ref()).await.unwrap_err(),
        WorkflowError::MentorAlreadyAccepted
    ));
}
