//! Project authorization
//!
//! Role hierarchy and permission derivation live in [`rbac`]; turning a
//! caller identity into a project role lives in [`membership`].

pub mod membership;
pub mod rbac;

pub use membership::{MembershipResolver, ProjectAccessState, RoleResolution};
pub use rbac::{
    Capability, OwnedAction, PermissionCheck, PermissionSet, can_manage_assigned,
    can_manage_user, can_modify, check_capability, has_higher_or_equal_role,
};
