//! The document moderation workflow.
//!
//! Submitted work enters the lifecycle `Pending` and leaves it exactly once,
//! to `Approved` or `Rejected`; both are terminal. Other document kinds skip
//! moderation and publish directly as `Approved`. Moderating a document that
//! is not pending is an explicit invalid-state error, never a silent no-op.

use crate::catalog::Capability;
use crate::errors::ModerationError;
use crate::resolver;
use chrono::Utc;
use lodgeworks_models::documents::{
    Document, DocumentKind, ModerationDecision, ModerationReview, ModerationState,
};
use lodgeworks_models::ids::{DocumentId, NotificationEventId, PrincipalId};
use lodgeworks_models::notifications::{
    NotificationEvent, NotificationPriority, TargetSpec,
};
use lodgeworks_models::principal::{GradeScope, Principal};
use tracing::{info, instrument};

/// The state a freshly uploaded document of `kind` enters.
pub const fn initial_state(kind: DocumentKind) -> ModerationState {
    if kind.requires_moderation() {
        ModerationState::Pending
    } else {
        ModerationState::Approved
    }
}

/// Build a new document in its correct initial state.
pub fn submit(
    owner: PrincipalId,
    title: impl Into<String>,
    kind: DocumentKind,
    scope: GradeScope,
) -> Document {
    Document {
        id: DocumentId::new(),
        owner,
        title: title.into(),
        kind,
        scope,
        state: initial_state(kind),
        review: None,
        created_at: Utc::now(),
    }
}

/// Apply a moderation decision to a pending document.
///
/// The moderator must hold [`Capability::ApproveSubmissions`] (through tier,
/// grade, or office), and the document must currently be `Pending`. On
/// success the document is moved to the decision's terminal state, the review
/// (moderator, timestamp, comments) is recorded on it, and a notification
/// event addressed to the document's owner is returned for dispatch.
#[instrument(skip(document, moderator, comments), fields(document = %document.id, moderator = %moderator.id))]
pub fn transition(
    document: &mut Document,
    decision: ModerationDecision,
    moderator: &Principal,
    comments: Option<String>,
) -> Result<NotificationEvent, ModerationError> {
    if !resolver::has(moderator, Capability::ApproveSubmissions) {
        return Err(ModerationError::Denied);
    }

    if document.state != ModerationState::Pending {
        return Err(ModerationError::InvalidTransition {
            from: document.state,
        });
    }

    let new_state = decision.target_state();
    document.state = new_state;
    document.review = Some(ModerationReview {
        moderator: moderator.id,
        decided_at: Utc::now(),
        comments: comments.clone(),
    });

    info!(state = %new_state, "document moderated");

    let (title, priority) = match decision {
        ModerationDecision::Approve => (
            format!("Your submission \"{}\" was approved", document.title),
            NotificationPriority::Normal,
        ),
        ModerationDecision::Reject => (
            format!("Your submission \"{}\" was rejected", document.title),
            NotificationPriority::High,
        ),
    };
    let body = comments.unwrap_or_else(|| match decision {
        ModerationDecision::Approve => "Your submission has been published.".to_string(),
        ModerationDecision::Reject => {
            "Your submission was not accepted for publication.".to_string()
        }
    });

    Ok(NotificationEvent {
        id: NotificationEventId::new(),
        title,
        body,
        category: "moderation".to_string(),
        priority,
        link: Some(format!("/documents/{}", document.id)),
        expires_at: None,
        sender: Some(moderator.id),
        target: TargetSpec::Single(document.owner),
    })
}
