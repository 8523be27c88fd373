//! Role-Based Access Control (RBAC) for project-scoped roles
//!
//! Permission derivation is a pure function of the role. Nothing in this
//! module performs I/O or holds mutable state.

mod ownership;
mod permissions;
mod roles;
mod types;

pub use ownership::{OwnedAction, can_modify};
pub use permissions::check_capability;
pub use roles::{can_manage_assigned, can_manage_user, has_higher_or_equal_role};
pub use types::{Capability, PermissionCheck, PermissionSet};
