//! Type definitions for the project access service

use crate::auth::membership::RoleResolution;
use crate::auth::rbac::PermissionSet;
use crate::core::models::{AssignedRole, ProjectRole};
use serde::Serialize;
use uuid::Uuid;

/// Resolved access of one identity to one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAccess {
    /// Project the access applies to
    pub project_id: Option<Uuid>,
    /// User the access applies to
    pub user_id: Option<Uuid>,
    /// Membership lookup outcome
    pub resolution: RoleResolution,
    /// Effective permissions
    pub permissions: PermissionSet,
    /// Whether the permissions come from the system admin override
    pub via_system_admin: bool,
}

impl ProjectAccess {
    /// Effective project role
    pub fn role(&self) -> Option<AssignedRole> {
        self.resolution.role()
    }

    pub fn is_project_member(&self) -> bool {
        self.resolution.is_project_member()
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self.resolution, RoleResolution::Unauthenticated)
    }
}

/// Membership change notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessEvent {
    /// What happened
    pub event_type: AccessEventType,
    /// Project that changed
    pub project_id: Uuid,
    /// Member the change applies to
    pub user_id: Uuid,
    /// Identity that performed the change
    pub actor_id: Uuid,
    /// When the change was applied
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Types of membership changes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessEventType {
    /// A user joined or was added to the project
    MemberAdded { role: ProjectRole },
    /// A member's role was replaced
    RoleChanged { from: AssignedRole, to: ProjectRole },
    /// A member left or was removed
    MemberRemoved { role: AssignedRole },
}
