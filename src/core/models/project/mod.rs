//! Project membership models
//!
//! A membership binds one user to one project with exactly one role.

mod member;
mod role;


pub use member::ProjectMember;
pub use role::{AssignedRole, ProjectRole};
