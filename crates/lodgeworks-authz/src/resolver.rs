//! Permission resolution: merging catalog lookups into an effective set.
//!
//! Resolution is pure and side-effect free. It performs no I/O and is safe to
//! call on every request from any number of concurrent tasks.

use crate::catalog::{self, Capability};
use lodgeworks_models::principal::{Principal, RankTier};
use std::collections::BTreeSet;

/// The union of every capability a principal holds through grade, office,
/// and administrator tier.
///
/// The super-administrator wildcard is deliberately *not* part of this set;
/// it short-circuits in [`has`] before any set membership is consulted.
pub fn effective(principal: &Principal) -> BTreeSet<Capability> {
    let mut caps: BTreeSet<Capability> = catalog::grade_grants(principal.grade)
        .iter()
        .copied()
        .collect();

    if let Some(office) = principal.office {
        caps.extend(catalog::office_grants(office).iter().copied());
    }

    if principal.rank == RankTier::Administrator {
        caps.extend(catalog::tier_grants(RankTier::Administrator).iter().copied());
    }

    caps
}

/// Point query: does this principal hold `capability`?
///
/// Super-administrators hold everything; for everyone else this is membership
/// in the effective set.
pub fn has(principal: &Principal, capability: Capability) -> bool {
    if principal.rank == RankTier::SuperAdministrator {
        return true;
    }
    effective(principal).contains(&capability)
}

/// Does this principal hold any of `capabilities`?
pub fn has_any(principal: &Principal, capabilities: &[Capability]) -> bool {
    capabilities.iter().any(|cap| has(principal, *cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodgeworks_models::ids::PrincipalId;
    use lodgeworks_models::principal::{Grade, Office};

    fn principal(rank: RankTier, grade: Grade) -> Principal {
        Principal::new(PrincipalId::new(), rank, grade)
    }

    #[test]
    fn test_super_administrator_holds_everything() {
        let root = principal(RankTier::SuperAdministrator, Grade::Apprentice);
        let all = [
            Capability::ManageMembers,
            Capability::UploadDocuments,
            Capability::ManageAllDocuments,
            Capability::ApproveSubmissions,
            Capability::CreatePrograms,
            Capability::ManageAllPrograms,
            Capability::SendNotifications,
            Capability::ManageNotifications,
        ];
        for cap in all {
            assert!(has(&root, cap), "expected wildcard to grant {cap}");
        }
    }

    #[test]
    fn test_absent_capability_is_denied() {
        let member = principal(RankTier::General, Grade::Apprentice);
        assert!(!has(&member, Capability::ManageMembers));
        assert!(!has(&member, Capability::ApproveSubmissions));
        assert!(!has(&member, Capability::SendNotifications));
    }

    #[test]
    fn test_grade_grants_flow_through() {
        let member = principal(RankTier::General, Grade::Master);
        assert!(has(&member, Capability::UploadDocuments));
        assert!(has(&member, Capability::CreatePrograms));
        assert!(!has(&member, Capability::ManageAllPrograms));
    }

    #[test]
    fn test_office_grants_union_with_grade() {
        let secretary = principal(RankTier::General, Grade::Companion)
            .with_office(Office::Secretary);
        let caps = effective(&secretary);
        assert!(caps.contains(&Capability::UploadDocuments), "from grade");
        assert!(caps.contains(&Capability::ManageMembers), "from office");
        assert!(caps.contains(&Capability::SendNotifications), "from office");
    }

    #[test]
    fn test_administrator_tier_unions_tier_grants() {
        let admin = principal(RankTier::Administrator, Grade::Apprentice);
        assert!(has(&admin, Capability::ManageAllDocuments));
        assert!(has(&admin, Capability::ApproveSubmissions));
    }

    #[test]
    fn test_effective_never_contains_wildcard_entries() {
        let root = principal(RankTier::SuperAdministrator, Grade::Apprentice);
        // Only grade grants show up in the set; the wildcard is a short-circuit.
        assert_eq!(
            effective(&root),
            effective(&principal(RankTier::General, Grade::Apprentice))
        );
    }

    #[test]
    fn test_has_any() {
        let orator = principal(RankTier::General, Grade::Companion).with_office(Office::Orator);
        assert!(has_any(
            &orator,
            &[Capability::ManageMembers, Capability::SendNotifications]
        ));
        assert!(!has_any(
            &orator,
            &[Capability::ManageMembers, Capability::ManageAllPrograms]
        ));
    }
}
