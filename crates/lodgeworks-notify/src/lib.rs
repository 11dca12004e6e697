//! # Lodgeworks Notify
//!
//! Notification targeting and fan-out for the Lodgeworks back office.
//!
//! Targeting ([`targeting::TargetResolver`]) is a pure set computation over a
//! snapshot of the active principals; delivery
//! ([`fanout::FanoutService`]) writes one independent record per recipient.
//! Both sides talk to the embedding application only through the
//! [`directory::PrincipalDirectory`] and [`store::NotificationStore`] traits.
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks_notify::{FanoutService, TargetResolver};
//! use lodgeworks_models::TargetSpec;
//!
//! let resolver = TargetResolver::new(directory);
//! let fanout = FanoutService::new(store);
//!
//! let recipients = resolver
//!     .resolve(&TargetSpec::Broadcast { exclude: Some(sender) })
//!     .await?;
//! let report = fanout.dispatch(&event, &recipients).await?;
//! println!("created {} notifications", report.created);
//! ```

pub mod directory;
pub mod errors;
pub mod fanout;
pub mod store;
pub mod targeting;

// Re-export commonly used types at crate root
pub use directory::PrincipalDirectory;
pub use errors::{DirectoryError, PartialDispatchFailure, StoreError};
pub use fanout::{DispatchReport, FanoutService};
pub use store::NotificationStore;
pub use targeting::TargetResolver;
