//! Error taxonomy of the authorization engine.
//!
//! Every decision function returns a value or one of these errors; nothing in
//! this crate aborts the caller. `Denied` is always safe to surface as
//! "forbidden" and is never retried. Unknown-label errors are data-integrity
//! defects: callers fail closed and log them as defects rather than user
//! errors.

use lodgeworks_models::documents::ModerationState;
use lodgeworks_models::principal::LabelError;
use thiserror::Error;

/// Outcome of an authorization check that did not allow the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// Policy said no. Safe to surface as forbidden; never retried.
    #[error("operation not permitted")]
    Denied,

    /// A persisted grade label did not parse. Fails closed to a denial.
    #[error("unknown grade label {0:?} in stored data")]
    UnknownGrade(String),

    /// A persisted office label did not parse. Fails closed to a denial.
    #[error("unknown office label {0:?} in stored data")]
    UnknownOffice(String),
}

impl From<LabelError> for AuthzError {
    fn from(err: LabelError) -> Self {
        match err {
            LabelError::UnknownGrade(label) => AuthzError::UnknownGrade(label),
            LabelError::UnknownOffice(label) | LabelError::UnknownTier(label) => {
                AuthzError::UnknownOffice(label)
            }
        }
    }
}

/// Failure of a moderation transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    /// The acting principal may not moderate submissions.
    #[error("principal is not permitted to moderate submissions")]
    Denied,

    /// The document is not in the one state transitions may leave.
    #[error("cannot moderate a document in state {from}")]
    InvalidTransition { from: ModerationState },
}
