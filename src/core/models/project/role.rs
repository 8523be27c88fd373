//! Project-scoped roles

use crate::utils::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project role
///
/// Variants are declared lowest first so the derived `Ord` follows the
/// hierarchy `Observer < Member < Lead`. A new role must be inserted at its
/// rank, and given a level in [`ProjectRole::hierarchy_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectRole {
    /// Read-only participant
    Observer,
    /// Contributor to knowledge and files
    Member,
    /// Project lead with full control
    Lead,
}

impl ProjectRole {
    /// All roles, highest first
    pub const ALL: [ProjectRole; 3] = [ProjectRole::Lead, ProjectRole::Member, ProjectRole::Observer];

    /// Numeric rank used for management decisions
    pub const fn hierarchy_level(self) -> u8 {
        match self {
            ProjectRole::Lead => 3,
            ProjectRole::Member => 2,
            ProjectRole::Observer => 1,
        }
    }

    /// Wire name of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectRole::Lead => "LEAD",
            ProjectRole::Member => "MEMBER",
            ProjectRole::Observer => "OBSERVER",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectRole {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEAD" => Ok(ProjectRole::Lead),
            "MEMBER" => Ok(ProjectRole::Member),
            "OBSERVER" => Ok(ProjectRole::Observer),
            _ => Err(GatewayError::unknown_role(s)),
        }
    }
}

/// Role value as stored on a membership record
///
/// Storage may hold values this build does not know. Those are preserved
/// verbatim as `Unrecognized` and never coerced into a known role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssignedRole {
    Known(ProjectRole),
    Unrecognized(String),
}

impl AssignedRole {
    /// The recognized role, if any
    pub fn known(&self) -> Option<ProjectRole> {
        match self {
            AssignedRole::Known(role) => Some(*role),
            AssignedRole::Unrecognized(_) => None,
        }
    }

    /// Rank of the assigned role; unrecognized values rank below every role
    pub fn hierarchy_level(&self) -> u8 {
        self.known().map_or(0, ProjectRole::hierarchy_level)
    }
}

impl From<ProjectRole> for AssignedRole {
    fn from(role: ProjectRole) -> Self {
        AssignedRole::Known(role)
    }
}

impl From<String> for AssignedRole {
    fn from(value: String) -> Self {
        match value.parse::<ProjectRole>() {
            Ok(role) => AssignedRole::Known(role),
            Err(_) => AssignedRole::Unrecognized(value),
        }
    }
}

impl From<&str> for AssignedRole {
    fn from(value: &str) -> Self {
        AssignedRole::from(value.to_string())
    }
}

impl From<AssignedRole> for String {
    fn from(role: AssignedRole) -> Self {
        match role {
            AssignedRole::Known(role) => role.as_str().to_string(),
            AssignedRole::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for AssignedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignedRole::Known(role) => role.fmt(f),
            AssignedRole::Unrecognized(raw) => write!(f, "{} (unrecognized)", raw),
        }
    }
}
