//! # Lodgeworks Models
//!
//! Domain models for the Lodgeworks back office.
//!
//! This crate provides the data structures shared by the authorization engine
//! and the notification pipeline:
//!
//! - [`ids`]: Strongly-typed ID newtypes
//! - [`principal`]: Principals and the three permission axes (tier, grade, office)
//! - [`documents`]: Documents, moderation lifecycle, and resource-target views
//! - [`notifications`]: Notification events, per-recipient records, and targeting specs
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks_models::{Grade, Principal, PrincipalId, RankTier};
//!
//! let member = Principal::new(PrincipalId::new(), RankTier::General, Grade::Companion);
//! assert!(member.grade.at_least(Grade::Apprentice));
//! ```

pub mod documents;
pub mod ids;
pub mod notifications;
pub mod principal;

// Re-export commonly used types at crate root for convenience
pub use documents::{
    Document, DocumentKind, ModerationDecision, ModerationReview, ModerationState, Operation,
    ResourceKind, ResourceTarget,
};

pub use ids::{DocumentId, NotificationEventId, NotificationId, PrincipalId, ProgramId};

pub use notifications::{
    NotificationDraft, NotificationEvent, NotificationPriority, NotificationRecord, TargetSpec,
};

pub use principal::{Grade, GradeScope, LabelError, Office, Principal, RankTier};
