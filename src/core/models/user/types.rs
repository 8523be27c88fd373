//! Core identity types and enums

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// System-wide role, independent of any project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemRole {
    /// Administrator
    Admin,
    /// Project manager
    ProjectManager,
    /// Regular user
    #[serde(other)]
    User,
}

impl std::fmt::Display for SystemRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemRole::Admin => write!(f, "ADMIN"),
            SystemRole::ProjectManager => write!(f, "PROJECT_MANAGER"),
            SystemRole::User => write!(f, "USER"),
        }
    }
}

impl std::str::FromStr for SystemRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(SystemRole::Admin),
            "PROJECT_MANAGER" => Ok(SystemRole::ProjectManager),
            "USER" => Ok(SystemRole::User),
            _ => Err(format!("Invalid system role: {}", s)),
        }
    }
}

/// Caller identity as handed over by the authentication layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID
    pub id: Uuid,
    /// System-wide role
    pub system_role: SystemRole,
    /// Whether the identity was actually authenticated
    #[serde(default)]
    pub authenticated: bool,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Identity {
    /// Create an authenticated identity
    pub fn authenticated(id: Uuid, system_role: SystemRole) -> Self {
        Self {
            id,
            system_role,
            authenticated: true,
            display_name: None,
        }
    }

    /// Create an identity whose session was not established
    pub fn unauthenticated(id: Uuid) -> Self {
        Self {
            id,
            system_role: SystemRole::User,
            authenticated: false,
            display_name: None,
        }
    }

    /// Set display name
    pub fn with_display_name<S: Into<String>>(mut self, name: S) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Check the coarse system-level admin flag
    pub fn is_system_admin(&self) -> bool {
        self.authenticated && self.system_role == SystemRole::Admin
    }
}
