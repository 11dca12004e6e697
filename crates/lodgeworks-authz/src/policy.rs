//! The single authorization entry point for every resource controller.
//!
//! Every call site asks the same question the same way: may this principal
//! perform this operation on this resource? The decision is a three-tier
//! fallback — blanket capability, then ownership-plus-state, then deny — and
//! controllers must never re-implement pieces of it ad hoc.
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks_authz::policy;
//! use lodgeworks_models::{Operation, ResourceKind, ResourceTarget};
//!
//! let target = ResourceTarget::from(&document);
//! policy::require(&caller, ResourceKind::Document, Operation::Update, Some(&target))?;
//! ```

use crate::catalog::Capability;
use crate::errors::AuthzError;
use crate::resolver;
use lodgeworks_models::documents::{ModerationState, Operation, ResourceKind, ResourceTarget};
use lodgeworks_models::principal::{Principal, RankTier};
use tracing::{debug, warn};

/// Decide whether `principal` may perform `op` on a resource of `kind`.
///
/// `target` carries the ownership, grade-scope, and lifecycle facts the
/// fallback rules inspect. Operations whose fallback needs a target deny
/// when none is supplied (and log the call site as defective); `Create`
/// never needs one.
pub fn authorize(
    principal: &Principal,
    kind: ResourceKind,
    op: Operation,
    target: Option<&ResourceTarget>,
) -> bool {
    // Tier 0: total authority.
    if principal.rank == RankTier::SuperAdministrator {
        return true;
    }

    // Tier 1: blanket capability for this operation on this kind.
    if let Some(cap) = Capability::blanket(op, kind) {
        if resolver::has(principal, cap) {
            debug!(principal = %principal.id, %kind, %op, %cap, "allowed by blanket capability");
            return true;
        }
    }

    // Tier 2: resource-specific fallback.
    let allowed = match (kind, op) {
        (ResourceKind::Member, Operation::Read) => match target {
            Some(t) => t.scope.visible_to(principal.grade),
            None => {
                warn!(%kind, %op, "authorization called without a target; denying");
                false
            }
        },
        // Members are not self-managed: writes require the blanket grant.
        (ResourceKind::Member, _) => false,

        (ResourceKind::Document, Operation::Read) | (ResourceKind::Program, Operation::Read) => {
            match target {
                Some(t) => t.scope.visible_to(principal.grade),
                None => {
                    warn!(%kind, %op, "authorization called without a target; denying");
                    false
                }
            }
        }

        // Creation is gated purely by the blanket capability above.
        (ResourceKind::Document, Operation::Create)
        | (ResourceKind::Program, Operation::Create) => false,

        // Authors may touch their own submission while it is still pending.
        (ResourceKind::Document, Operation::Update)
        | (ResourceKind::Document, Operation::Delete) => match target {
            Some(t) => {
                t.owner == Some(principal.id) && t.state == Some(ModerationState::Pending)
            }
            None => {
                warn!(%kind, %op, "authorization called without a target; denying");
                false
            }
        },

        // Program owners keep control of their own programs.
        (ResourceKind::Program, Operation::Update)
        | (ResourceKind::Program, Operation::Delete) => match target {
            Some(t) => t.owner == Some(principal.id),
            None => {
                warn!(%kind, %op, "authorization called without a target; denying");
                false
            }
        },
    };

    debug!(principal = %principal.id, %kind, %op, allowed, "fallback decision");
    allowed
}

/// [`authorize`] as a guard: `Ok(())` or [`AuthzError::Denied`].
pub fn require(
    principal: &Principal,
    kind: ResourceKind,
    op: Operation,
    target: Option<&ResourceTarget>,
) -> Result<(), AuthzError> {
    if authorize(principal, kind, op, target) {
        Ok(())
    } else {
        Err(AuthzError::Denied)
    }
}
