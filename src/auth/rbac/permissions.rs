//! Role to permission derivation

use crate::core::models::{AssignedRole, ProjectRole};
use tracing::warn;

use super::types::{Capability, PermissionCheck, PermissionSet};

const LEAD_PERMISSIONS: PermissionSet = PermissionSet::all();

// Edit and delete rights here are not ownership-filtered; see `can_modify`.
const MEMBER_PERMISSIONS: PermissionSet = PermissionSet {
    view_project: true,
    create_knowledge: true,
    edit_knowledge: true,
    delete_knowledge: true,
    upload_files: true,
    delete_files: true,
    view_members: true,
    ..PermissionSet::none()
};

const OBSERVER_PERMISSIONS: PermissionSet = PermissionSet {
    view_project: true,
    view_members: true,
    ..PermissionSet::none()
};

impl PermissionSet {
    /// Permission set for a known role
    pub const fn for_role(role: ProjectRole) -> Self {
        match role {
            ProjectRole::Lead => LEAD_PERMISSIONS,
            ProjectRole::Member => MEMBER_PERMISSIONS,
            ProjectRole::Observer => OBSERVER_PERMISSIONS,
        }
    }

    /// Permission set for a stored role value
    ///
    /// Unrecognized values get nothing.
    pub fn for_assigned(role: &AssignedRole) -> Self {
        match role {
            AssignedRole::Known(role) => Self::for_role(*role),
            AssignedRole::Unrecognized(raw) => {
                warn!(role = %raw, "Unrecognized project role, denying all capabilities");
                Self::none()
            }
        }
    }

    /// Permission set for a raw role name
    pub fn for_role_name(name: &str) -> Self {
        Self::for_assigned(&AssignedRole::from(name))
    }
}

/// Detailed check of one capability for a stored role value
pub fn check_capability(role: &AssignedRole, capability: Capability) -> PermissionCheck {
    let permissions = PermissionSet::for_assigned(role);

    if permissions.allows(capability) {
        PermissionCheck {
            granted: true,
            capability,
            granted_by_role: role.known(),
            denial_reason: None,
        }
    } else {
        PermissionCheck {
            granted: false,
            capability,
            granted_by_role: None,
            denial_reason: Some(format!("Role {} lacks permission: {}", role, capability)),
        }
    }
}
