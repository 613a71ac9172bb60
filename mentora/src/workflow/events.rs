//! Notification boundary for workflow events
//!
//! The engine emits an event after every successful submission and after the
//! state-flipping accept. Delivery (email, push, anything else) lives with
//! the caller: implement [`RelationNotifier`] and register it on the
//! engine's [`NotifierRegistry`]. Notifier failures are logged and never
//! fail the workflow operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::{RelationId, UserId};

/// Role the sender played in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    Mentor,
    Mentee,
    Organization,
}

/// A new request was submitted and persisted.
///
/// The recipient is the org rep when a named party sent the request, and
/// the relation's mentor (or, failing that, its mentee) when the org rep
/// sent it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestSent {
    pub relation_id: RelationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub sender_role: SenderRole,
    pub notes: String,
}

/// The second accept flipped the relation to ACCEPTED.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationAccepted {
    pub relation_id: RelationId,
    pub mentor_id: Option<UserId>,
    pub mentee_id: Option<UserId>,
    pub org_rep_id: UserId,
}

/// Error a notifier may surface; logged by the registry.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NotifyError(pub String);

/// Receives workflow events. Each handler has a default no-op so
/// implementations only override what they care about.
#[async_trait]
pub trait RelationNotifier: Send + Sync + Debug {
    /// Name used in log lines
    fn name(&self) -> &str {
        "relation_notifier"
    }

    /// Called after every successful request submission
    async fn on_request_sent(&self, _event: &RequestSent) -> Result<(), NotifyError> {
        Ok(())
    }

    /// Called after the accept that flipped the relation to ACCEPTED
    async fn on_relation_accepted(&self, _event: &RelationAccepted) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Ordered collection of notifiers attached to an engine.
#[derive(Debug, Clone, Default)]
pub struct NotifierRegistry {
    notifiers: Arc<RwLock<Vec<Arc<dyn RelationNotifier>>>>,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self {
            notifiers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a notifier. Notifiers run in registration order.
    pub async fn register(&self, notifier: Arc<dyn RelationNotifier>) {
        let name = notifier.name().to_string();
        self.notifiers.write().await.push(notifier);
        debug!("notifier registered: {}", name);
    }

    pub(crate) async fn notify_request_sent(&self, event: &RequestSent) {
        let notifiers = self.notifiers.read().await;
        for notifier in notifiers.iter() {
            if let Err(err) = notifier.on_request_sent(event).await {
                warn!(
                    notifier = notifier.name(),
                    relation_id = %event.relation_id,
                    "request-sent notifier failed: {}",
                    err
                );
            }
        }
    }

    pub(crate) async fn notify_relation_accepted(&self, event: &RelationAccepted) {
        let notifiers = self.notifiers.read().await;
        for notifier in notifiers.iter() {
            if let Err(err) = notifier.on_relation_accepted(event).await {
                warn!(
                    notifier = notifier.name(),
                    relation_id = %event.relation_id,
                    "relation-accepted notifier failed: {}",
                    err
                );
            }
        }
    }
}
