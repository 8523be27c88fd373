//! Role hierarchy comparisons

use crate::core::models::{AssignedRole, ProjectRole};

use super::types::PermissionSet;

/// Whether `candidate` ranks at or above `target`
pub fn has_higher_or_equal_role(candidate: ProjectRole, target: ProjectRole) -> bool {
    candidate.hierarchy_level() >= target.hierarchy_level()
}

/// Whether a user holding `acting` may manage a user holding `target`
///
/// Requires the manage-members capability and a strictly higher rank, so
/// peers cannot manage each other.
pub fn can_manage_user(acting: ProjectRole, target: ProjectRole) -> bool {
    PermissionSet::for_role(acting).manage_members
        && acting.hierarchy_level() > target.hierarchy_level()
}

/// [`can_manage_user`] over stored role values
///
/// An unrecognized acting role can never manage. An unrecognized target ranks
/// below every known role.
pub fn can_manage_assigned(acting: &AssignedRole, target: &AssignedRole) -> bool {
    match acting.known() {
        Some(acting) => {
            PermissionSet::for_role(acting).manage_members
                && acting.hierarchy_level() > target.hierarchy_level()
        }
        None => false,
    }
}
