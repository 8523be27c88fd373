//! Project membership resolution
//!
//! Determines which role, if any, an identity holds in a project.

mod resolver;
mod state;

pub use resolver::{MembershipResolver, RoleResolution};
pub use state::ProjectAccessState;
