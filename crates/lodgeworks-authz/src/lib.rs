//! # Lodgeworks Authz
//!
//! The authorization and moderation engine for the Lodgeworks back office.
//!
//! This crate has no shared mutable state: the permission catalog is
//! compile-time data and every decision function is pure, so the whole
//! engine is safe to call concurrently from any number of request handlers.
//!
//! - [`catalog`]: Capability tokens and the static grant tables
//! - [`resolver`]: Effective-capability resolution and point queries
//! - [`policy`]: The single `authorize` entry point every controller uses
//! - [`moderation`]: The document moderation state machine
//! - [`errors`]: Error taxonomy (denials, invalid transitions, label defects)
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks_authz::{policy, resolver, catalog::Capability};
//! use lodgeworks_models::{Operation, ResourceKind, ResourceTarget};
//!
//! if resolver::has(&caller, Capability::SendNotifications) {
//!     // Caller may address cohorts directly
//! }
//!
//! let target = ResourceTarget::from(&document);
//! policy::require(&caller, ResourceKind::Document, Operation::Delete, Some(&target))?;
//! ```

pub mod catalog;
pub mod errors;
pub mod moderation;
pub mod policy;
pub mod resolver;

// Re-export commonly used types at crate root
pub use catalog::Capability;
pub use errors::{AuthzError, ModerationError};
pub use policy::{authorize, require};
