//! # Lodgeworks
//!
//! Authorization, moderation, and notification engine for membership
//! organizations.
//!
//! This facade re-exports the public API of the engine crates:
//!
//! - [`models`]: Domain models (principals, documents, notifications)
//! - [`authz`]: Permission resolution, resource policy, moderation workflow
//! - [`notify`]: Notification targeting and fan-out
//!
//! The engine is a library-level contract consumed in-process by a
//! surrounding CRUD layer: it decides who may do what and who hears about
//! it, while routing, persistence, and authentication remain with the
//! embedding application.
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks::authz::policy;
//! use lodgeworks::models::{Operation, ResourceKind, ResourceTarget};
//! use lodgeworks::notify::{FanoutService, TargetResolver};
//!
//! // Gate a controller operation.
//! let target = ResourceTarget::from(&document);
//! policy::require(&caller, ResourceKind::Document, Operation::Update, Some(&target))?;
//!
//! // Fan a domain event out to its cohort.
//! let recipients = resolver.resolve(&event.target).await?;
//! let report = fanout.dispatch(&event, &recipients).await?;
//! ```

pub use lodgeworks_authz as authz;
pub use lodgeworks_models as models;
pub use lodgeworks_notify as notify;

pub mod logging;

// Flat re-exports of the types nearly every embedder touches
pub use lodgeworks_authz::{AuthzError, Capability, ModerationError, authorize, require};
pub use lodgeworks_models::{
    Grade, GradeScope, Office, Operation, Principal, PrincipalId, RankTier, ResourceKind,
    ResourceTarget,
};
pub use lodgeworks_notify::{DispatchReport, FanoutService, TargetResolver};
