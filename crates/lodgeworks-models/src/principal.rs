//! Principal models: the authenticated actor and its three permission axes.
//!
//! A [`Principal`] carries everything the authorization engine needs to make
//! a decision: a rank tier (system-wide authority), a grade (hierarchical
//! standing within the organization), and an optional office (elected or
//! appointed position). The engine reads these fields and never mutates them;
//! the record is owned by the calling request context.
//!
//! # Core Types
//!
//! - [`Principal`] - The authenticated actor presented to the engine
//! - [`RankTier`] - Coarse system role (general / administrator / super-administrator)
//! - [`Grade`] - Hierarchical rank with a fixed total order
//! - [`Office`] - Optional named position, orthogonal to grade
//! - [`GradeScope`] - The grade-or-general label carried by scoped resources

use crate::ids::PrincipalId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a persisted label does not name a known grade or
/// office. Callers treat this as a data-integrity defect and fail closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unknown grade label: {0:?}")]
    UnknownGrade(String),
    #[error("unknown office label: {0:?}")]
    UnknownOffice(String),
    #[error("unknown rank tier label: {0:?}")]
    UnknownTier(String),
}

/// Coarse system role of a principal.
///
/// Total authority is strictly increasing: a super-administrator bypasses
/// every capability and grade check in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    General,
    Administrator,
    SuperAdministrator,
}

impl RankTier {
    /// True for administrator and super-administrator tiers.
    pub fn is_administrative(&self) -> bool {
        matches!(self, RankTier::Administrator | RankTier::SuperAdministrator)
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankTier::General => "general",
            RankTier::Administrator => "administrator",
            RankTier::SuperAdministrator => "super_administrator",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RankTier {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(RankTier::General),
            "administrator" => Ok(RankTier::Administrator),
            "super_administrator" => Ok(RankTier::SuperAdministrator),
            other => Err(LabelError::UnknownTier(other.to_string())),
        }
    }
}

/// Hierarchical grade of a member, with the fixed total order
/// Apprentice < Companion < Master.
///
/// The ordering is compile-time data and never changes at runtime. All
/// "can see content of this grade" semantics in the system reduce to
/// [`Grade::at_least`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Apprentice,
    Companion,
    Master,
}

impl Grade {
    /// Position of this grade in the hierarchy (higher = more senior).
    pub const fn ordinal(&self) -> u8 {
        match self {
            Grade::Apprentice => 0,
            Grade::Companion => 1,
            Grade::Master => 2,
        }
    }

    /// The single comparison primitive of the grade hierarchy.
    ///
    /// Returns true iff this grade is at least as senior as `other`. The
    /// relation is one-way: a Master sees Apprentice content, never the
    /// reverse.
    pub const fn at_least(&self, other: Grade) -> bool {
        self.ordinal() >= other.ordinal()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Apprentice => "apprentice",
            Grade::Companion => "companion",
            Grade::Master => "master",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Grade {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apprentice" => Ok(Grade::Apprentice),
            "companion" => Ok(Grade::Companion),
            "master" => Ok(Grade::Master),
            other => Err(LabelError::UnknownGrade(other.to_string())),
        }
    }
}

/// Elected or appointed position held by a principal.
///
/// An office grants capabilities independent of grade; a principal holds at
/// most one office at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Office {
    Secretary,
    Orator,
    Treasurer,
    PresidingOfficer,
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Office::Secretary => "secretary",
            Office::Orator => "orator",
            Office::Treasurer => "treasurer",
            Office::PresidingOfficer => "presiding_officer",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Office {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secretary" => Ok(Office::Secretary),
            "orator" => Ok(Office::Orator),
            "treasurer" => Ok(Office::Treasurer),
            "presiding_officer" => Ok(Office::PresidingOfficer),
            other => Err(LabelError::UnknownOffice(other.to_string())),
        }
    }
}

/// The grade-or-general visibility label carried by grade-scoped resources.
///
/// `General` content is visible to every grade; `Grade(g)` content is visible
/// to principals whose own grade is at least `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeScope {
    General,
    Grade(Grade),
}

impl GradeScope {
    /// Whether a principal of grade `viewer` may see content carrying this
    /// scope.
    pub const fn visible_to(&self, viewer: Grade) -> bool {
        match self {
            GradeScope::General => true,
            GradeScope::Grade(g) => viewer.at_least(*g),
        }
    }
}

impl fmt::Display for GradeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeScope::General => write!(f, "general"),
            GradeScope::Grade(g) => write!(f, "{}", g),
        }
    }
}

impl FromStr for GradeScope {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "general" {
            return Ok(GradeScope::General);
        }
        Ok(GradeScope::Grade(s.parse()?))
    }
}

/// The authenticated actor presented to the engine.
///
/// Produced by an external authentication component from a validated bearer
/// credential; the engine trusts these fields and performs no credential
/// validation of its own. Immutable for the duration of a single decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub rank: RankTier,
    pub grade: Grade,
    pub office: Option<Office>,
    pub active: bool,
}

impl Principal {
    /// Construct an active principal with no office.
    pub fn new(id: PrincipalId, rank: RankTier, grade: Grade) -> Self {
        Self {
            id,
            rank,
            grade,
            office: None,
            active: true,
        }
    }

    /// Attach an office.
    pub fn with_office(mut self, office: Office) -> Self {
        self.office = Some(office);
        self
    }
}
