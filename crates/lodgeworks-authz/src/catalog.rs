//! Capability tokens and the static permission catalog.
//!
//! Capabilities are a closed enumeration rather than free-form strings, so a
//! misspelled grant is a compile error instead of a silent authorization
//! bypass. The catalog is immutable data fixed at compile time; changing a
//! grant means a redeploy, never an in-place mutation.
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks_authz::catalog::{self, Capability};
//! use lodgeworks_models::Office;
//!
//! let grants = catalog::office_grants(Office::Secretary);
//! assert!(grants.contains(&Capability::SendNotifications));
//! ```

use lodgeworks_models::documents::{Operation, ResourceKind};
use lodgeworks_models::principal::{Grade, Office, RankTier};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque named grant.
///
/// Capabilities are never parameterized; resource-specific nuance lives in
/// the policy layer, not in the capability name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManageMembers,
    UploadDocuments,
    ManageAllDocuments,
    ApproveSubmissions,
    CreatePrograms,
    ManageAllPrograms,
    SendNotifications,
    ManageNotifications,
}

impl Capability {
    /// Canonical token for this capability.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageMembers => "manage_members",
            Capability::UploadDocuments => "upload_documents",
            Capability::ManageAllDocuments => "manage_all_documents",
            Capability::ApproveSubmissions => "approve_submissions",
            Capability::CreatePrograms => "create_programs",
            Capability::ManageAllPrograms => "manage_all_programs",
            Capability::SendNotifications => "send_notifications",
            Capability::ManageNotifications => "manage_notifications",
        }
    }

    /// The blanket capability that allows `op` on `kind` outright, when one
    /// exists.
    ///
    /// Holding the returned capability short-circuits the resource-specific
    /// fallback rules; its absence does not by itself deny anything.
    pub const fn blanket(op: Operation, kind: ResourceKind) -> Option<Capability> {
        match (kind, op) {
            (ResourceKind::Member, _) => Some(Capability::ManageMembers),
            (ResourceKind::Document, Operation::Create) => Some(Capability::UploadDocuments),
            (ResourceKind::Document, _) => Some(Capability::ManageAllDocuments),
            (ResourceKind::Program, Operation::Create) => Some(Capability::CreatePrograms),
            (ResourceKind::Program, _) => Some(Capability::ManageAllPrograms),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manage_members" => Ok(Capability::ManageMembers),
            "upload_documents" => Ok(Capability::UploadDocuments),
            "manage_all_documents" => Ok(Capability::ManageAllDocuments),
            "approve_submissions" => Ok(Capability::ApproveSubmissions),
            "create_programs" => Ok(Capability::CreatePrograms),
            "manage_all_programs" => Ok(Capability::ManageAllPrograms),
            "send_notifications" => Ok(Capability::SendNotifications),
            "manage_notifications" => Ok(Capability::ManageNotifications),
            other => Err(UnknownCapability(other.to_string())),
        }
    }
}

/// A capability token that does not name a known grant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability token: {0:?}")]
pub struct UnknownCapability(pub String);

/// Grants attached to a rank tier.
///
/// Super-administrator is a wildcard handled before any table lookup; its
/// entry here is intentionally empty so it can never be accidentally merged
/// into an effective set.
pub const fn tier_grants(tier: RankTier) -> &'static [Capability] {
    match tier {
        RankTier::General => &[],
        RankTier::Administrator => &[
            Capability::ManageMembers,
            Capability::UploadDocuments,
            Capability::ManageAllDocuments,
            Capability::ApproveSubmissions,
            Capability::CreatePrograms,
            Capability::ManageAllPrograms,
            Capability::SendNotifications,
            Capability::ManageNotifications,
        ],
        RankTier::SuperAdministrator => &[],
    }
}

/// Grants attached to a grade.
pub const fn grade_grants(grade: Grade) -> &'static [Capability] {
    match grade {
        Grade::Apprentice => &[Capability::UploadDocuments],
        Grade::Companion => &[Capability::UploadDocuments],
        Grade::Master => &[Capability::UploadDocuments, Capability::CreatePrograms],
    }
}

/// Grants attached to an office, independent of the holder's grade.
pub const fn office_grants(office: Office) -> &'static [Capability] {
    match office {
        Office::Secretary => &[Capability::ManageMembers, Capability::SendNotifications],
        Office::Orator => &[Capability::SendNotifications],
        Office::Treasurer => &[],
        Office::PresidingOfficer => &[
            Capability::ApproveSubmissions,
            Capability::CreatePrograms,
            Capability::ManageAllPrograms,
            Capability::SendNotifications,
        ],
    }
}
