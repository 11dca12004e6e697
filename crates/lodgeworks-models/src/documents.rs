//! Document and resource-access models.
//!
//! Documents are the one resource with a lifecycle: member-submitted work
//! passes through moderation before it is published, while administrative
//! document kinds publish immediately. This module also defines the
//! [`ResourceTarget`] view that the authorization policy inspects for every
//! resource kind.

use crate::ids::{DocumentId, PrincipalId};
use crate::principal::{Grade, GradeScope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of documents members and officers can upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Member-authored work; requires moderation before publication.
    SubmittedWork,
    /// Organizational bulletin; published immediately.
    Bulletin,
    /// Archival material; published immediately.
    Archive,
}

impl DocumentKind {
    /// Whether documents of this kind must pass moderation.
    pub const fn requires_moderation(&self) -> bool {
        matches!(self, DocumentKind::SubmittedWork)
    }
}

/// Lifecycle state of a document.
///
/// `Pending` is the only state a transition may leave; `Approved` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationState {
    Pending,
    Approved,
    Rejected,
}

impl ModerationState {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, ModerationState::Pending)
    }
}

impl fmt::Display for ModerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModerationState::Pending => "pending",
            ModerationState::Approved => "approved",
            ModerationState::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

/// A moderator's decision on a pending document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    /// The terminal state this decision moves the document into.
    pub const fn target_state(&self) -> ModerationState {
        match self {
            ModerationDecision::Approve => ModerationState::Approved,
            ModerationDecision::Reject => ModerationState::Rejected,
        }
    }
}

/// Record of who moderated a document, when, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationReview {
    pub moderator: PrincipalId,
    pub decided_at: chrono::DateTime<chrono::Utc>,
    pub comments: Option<String>,
}

/// An uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub owner: PrincipalId,
    pub title: String,
    pub kind: DocumentKind,
    pub scope: GradeScope,
    pub state: ModerationState,
    pub review: Option<ModerationReview>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The kinds of resources the policy engine gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Member,
    Document,
    Program,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Member => "member",
            ResourceKind::Document => "document",
            ResourceKind::Program => "program",
        };
        write!(f, "{}", s)
    }
}

/// The operations a caller may request on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        write!(f, "{}", s)
    }
}

/// The view of a resource that the authorization policy inspects.
///
/// Controllers build one of these from whatever entity they hold; the policy
/// never loads entities itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTarget {
    pub kind: ResourceKind,
    /// Owning principal, where the resource kind has an owner.
    pub owner: Option<PrincipalId>,
    /// Grade-or-general visibility label.
    pub scope: GradeScope,
    /// Lifecycle state, for kinds that have one (documents).
    pub state: Option<ModerationState>,
}

impl ResourceTarget {
    /// Target view of a member record of the given grade.
    pub fn member(grade: Grade) -> Self {
        Self {
            kind: ResourceKind::Member,
            owner: None,
            scope: GradeScope::Grade(grade),
            state: None,
        }
    }

    /// Target view of a program owned by `owner` with visibility `scope`.
    pub fn program(owner: PrincipalId, scope: GradeScope) -> Self {
        Self {
            kind: ResourceKind::Program,
            owner: Some(owner),
            scope,
            state: None,
        }
    }
}

impl From<&Document> for ResourceTarget {
    fn from(doc: &Document) -> Self {
        Self {
            kind: ResourceKind::Document,
            owner: Some(doc.owner),
            scope: doc.scope,
            state: Some(doc.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_submitted_work_requires_moderation() {
        assert!(DocumentKind::SubmittedWork.requires_moderation());
        assert!(!DocumentKind::Bulletin.requires_moderation());
        assert!(!DocumentKind::Archive.requires_moderation());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ModerationState::Pending.is_terminal());
        assert!(ModerationState::Approved.is_terminal());
        assert!(ModerationState::Rejected.is_terminal());
    }

    #[test]
    fn test_decision_target_states() {
        assert_eq!(
            ModerationDecision::Approve.target_state(),
            ModerationState::Approved
        );
        assert_eq!(
            ModerationDecision::Reject.target_state(),
            ModerationState::Rejected
        );
    }

    #[test]
    fn test_target_from_document() {
        let doc = Document {
            id: DocumentId::new(),
            owner: PrincipalId::from_u128(7),
            title: "Working notes".to_string(),
            kind: DocumentKind::SubmittedWork,
            scope: GradeScope::General,
            state: ModerationState::Pending,
            review: None,
            created_at: chrono::Utc::now(),
        };
        let target = ResourceTarget::from(&doc);
        assert_eq!(target.kind, ResourceKind::Document);
        assert_eq!(target.owner, Some(doc.owner));
        assert_eq!(target.state, Some(ModerationState::Pending));
    }
}
