//! Notification models and DTOs.
//!
//! A [`NotificationEvent`] is the single broadcast emitted by a domain event
//! (document uploaded, program scheduled, moderation decided). Fan-out turns
//! one event into one [`NotificationRecord`] per recipient; records carry a
//! content snapshot and are independently mutable thereafter.

use crate::ids::{NotificationEventId, NotificationId, PrincipalId};
use crate::principal::GradeScope;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery priority of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Who a notification event is addressed to.
///
/// Cohort variants may exclude the sending principal so authors do not
/// notify themselves about their own actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetSpec {
    /// Every active principal.
    Broadcast { exclude: Option<PrincipalId> },
    /// Every active principal whose grade may view content of `scope`.
    GradeCohort {
        scope: GradeScope,
        exclude: Option<PrincipalId>,
    },
    /// Administrators plus office-holders with notification reach.
    AdministrativeCohort { exclude: Option<PrincipalId> },
    /// Exactly one principal; existence is verified upstream.
    Single(PrincipalId),
}

/// Validated input for building a notification event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NotificationDraft {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 5000, message = "Body must be between 1 and 5000 characters"))]
    pub body: String,
    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    pub category: String,
    #[serde(default)]
    pub priority: NotificationPriority,
    /// Optional deep link into the client application.
    pub link: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub sender: Option<PrincipalId>,
}

/// One broadcast-worthy domain event, ready for targeting and fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub id: NotificationEventId,
    pub title: String,
    pub body: String,
    pub category: String,
    pub priority: NotificationPriority,
    pub link: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub sender: Option<PrincipalId>,
    pub target: TargetSpec,
}

impl NotificationEvent {
    /// Build an event from a validated draft and a targeting spec.
    ///
    /// Callers validate the draft first; this constructor only assigns the
    /// event identity.
    pub fn from_draft(draft: NotificationDraft, target: TargetSpec) -> Self {
        Self {
            id: NotificationEventId::new(),
            title: draft.title,
            body: draft.body,
            category: draft.category,
            priority: draft.priority,
            link: draft.link,
            expires_at: draft.expires_at,
            sender: draft.sender,
            target,
        }
    }
}

/// One per-recipient notification row.
///
/// Carries a snapshot of the event content so later edits to the event never
/// rewrite what a recipient already received. Rows for one event are mutually
/// independent: marking one read never affects its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub event_id: NotificationEventId,
    pub recipient: PrincipalId,
    pub title: String,
    pub body: String,
    pub category: String,
    pub priority: NotificationPriority,
    pub link: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub read: bool,
    pub read_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl NotificationRecord {
    /// Materialize the record for one recipient of an event.
    pub fn for_recipient(
        event: &NotificationEvent,
        recipient: PrincipalId,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            event_id: event.id,
            recipient,
            title: event.title.clone(),
            body: event.body.clone(),
            category: event.category.clone(),
            priority: event.priority,
            link: event.link.clone(),
            expires_at: event.expires_at,
            read: false,
            read_at: None,
            created_at: now,
        }
    }

    /// Mark the record read. Idempotent: the first read timestamp wins.
    pub fn mark_read(&mut self, now: chrono::DateTime<chrono::Utc>) {
        if !self.read {
            self.read = true;
            self.read_at = Some(now);
        }
    }

    /// Whether the expiry sweep should remove this record at `now`.
    pub fn is_expired(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
