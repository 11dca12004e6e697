//! Recipient-set computation for notification targeting specs.
//!
//! Targeting is a pure set computation over a snapshot of the active
//! principals: "who" is decided here, delivery happens in
//! [`crate::fanout`]. This keeps cohort logic testable without any
//! persistence layer.

use crate::directory::PrincipalDirectory;
use crate::errors::DirectoryError;
use lodgeworks_authz::catalog::Capability;
use lodgeworks_authz::resolver;
use lodgeworks_models::ids::PrincipalId;
use lodgeworks_models::notifications::TargetSpec;
use lodgeworks_models::principal::{GradeScope, Principal};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Resolves targeting specs to recipient-id sets against a directory.
pub struct TargetResolver<D> {
    directory: D,
}

impl<D: PrincipalDirectory> TargetResolver<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Compute the recipient set for `spec`.
    ///
    /// Deterministic for a fixed active-principal snapshot. The result is a
    /// set; no ordering is implied. `Single` targets are passed through
    /// without an existence check (verified upstream).
    #[instrument(skip(self, spec))]
    pub async fn resolve(&self, spec: &TargetSpec) -> Result<BTreeSet<PrincipalId>, DirectoryError> {
        let recipients = match spec {
            TargetSpec::Single(id) => BTreeSet::from([*id]),
            TargetSpec::Broadcast { exclude } => {
                let active = self.directory.active_principals().await?;
                collect(active, *exclude, |_| true)
            }
            TargetSpec::GradeCohort { scope, exclude } => {
                let active = self.directory.active_principals().await?;
                collect(active, *exclude, |p| scope_reaches(p, *scope))
            }
            TargetSpec::AdministrativeCohort { exclude } => {
                let active = self.directory.active_principals().await?;
                collect(active, *exclude, |p| {
                    p.rank.is_administrative()
                        || resolver::has(p, Capability::SendNotifications)
                })
            }
        };
        debug!(count = recipients.len(), "resolved recipients");
        Ok(recipients)
    }
}

/// A grade cohort reaches everyone who would be allowed to view content of
/// that scope; the "general" scope reaches all active principals.
fn scope_reaches(principal: &Principal, scope: GradeScope) -> bool {
    scope.visible_to(principal.grade)
}

fn collect(
    active: Vec<Principal>,
    exclude: Option<PrincipalId>,
    keep: impl Fn(&Principal) -> bool,
) -> BTreeSet<PrincipalId> {
    active
        .iter()
        .filter(|p| p.active)
        .filter(|p| keep(p))
        .map(|p| p.id)
        .filter(|id| Some(*id) != exclude)
        .collect()
}
